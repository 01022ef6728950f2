//! engine::modes
//!
//! Policy types that change how the engine treats its input.
//!
//! # Self-Loops
//!
//! A self-loop `(a, a)` makes `a` its own neighbour. Read literally, first-fit
//! placement could then never put `a` anywhere, not even in a fresh singleton
//! group. [`SelfLoopPolicy`] decides what happens instead:
//!
//! - `Ignore` (default): the self-loop is kept in the relation and reported by
//!   adjacency queries, but it never blocks placement. `[(a, a)]` colors to
//!   `[[a]]`.
//! - `Reject`: construction fails, naming the first self-looped node in input
//!   order.
//!
//! # Node Order
//!
//! First-fit results depend on the order nodes are visited. [`NodeOrder`]
//! fixes that order at construction time.
//!
//! # Example
//!
//! ```
//! use colorwork::engine::modes::{NodeOrder, SelfLoopPolicy};
//!
//! let policy: SelfLoopPolicy = "reject".parse().unwrap();
//! assert_eq!(policy, SelfLoopPolicy::Reject);
//!
//! let order: NodeOrder = "first-appearance".parse().unwrap();
//! assert_eq!(order, NodeOrder::default());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from mode parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModeError {
    #[error("unknown {kind} '{value}', must be one of: {expected}")]
    Unknown {
        /// What was being parsed
        kind: &'static str,
        /// The rejected value
        value: String,
        /// Accepted spellings
        expected: &'static str,
    },
}

/// How self-loop edges are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelfLoopPolicy {
    /// Keep the edge, but never let it block placement.
    #[default]
    Ignore,
    /// Refuse to build an engine over a relation with self-loops.
    Reject,
}

impl SelfLoopPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Reject => "reject",
        }
    }
}

impl FromStr for SelfLoopPolicy {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(Self::Ignore),
            "reject" => Ok(Self::Reject),
            other => Err(ModeError::Unknown {
                kind: "self-loop policy",
                value: other.to_string(),
                expected: "ignore, reject",
            }),
        }
    }
}

impl fmt::Display for SelfLoopPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The order in which the coloring pass visits nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeOrder {
    /// Order of first occurrence in the edge list.
    #[default]
    FirstAppearance,
    /// Lexicographic by identifier.
    Sorted,
}

impl NodeOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstAppearance => "first-appearance",
            Self::Sorted => "sorted",
        }
    }
}

impl FromStr for NodeOrder {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-appearance" => Ok(Self::FirstAppearance),
            "sorted" => Ok(Self::Sorted),
            other => Err(ModeError::Unknown {
                kind: "node order",
                value: other.to_string(),
                expected: "first-appearance, sorted",
            }),
        }
    }
}

impl fmt::Display for NodeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine construction options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub self_loops: SelfLoopPolicy,
    pub node_order: NodeOrder,
}

impl EngineOptions {
    pub fn self_loops(mut self, policy: SelfLoopPolicy) -> Self {
        self.self_loops = policy;
        self
    }

    pub fn node_order(mut self, order: NodeOrder) -> Self {
        self.node_order = order;
        self
    }
}
