//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Node`] - Validated node identifier
//! - [`Edge`] - Neighbour constraint between two nodes
//!
//! # Validation
//!
//! Node identifiers are opaque, but a few values are never meaningful and
//! are rejected at construction time: the empty string, whitespace-only
//! strings, and anything containing control characters.
//!
//! # Examples
//!
//! ```
//! use colorwork::core::types::{Edge, Node};
//!
//! let dk = Node::new("dk").unwrap();
//! let se = Node::new("se").unwrap();
//! let edge = Edge::new(dk.clone(), se);
//!
//! assert_eq!(edge.first(), &dk);
//! assert!(!edge.is_self_loop());
//!
//! assert!(Node::new("").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid node identifier {0:?}: {1}")]
    InvalidNode(String, &'static str),
}

/// A validated node identifier.
///
/// Nodes carry no attributes beyond identity. Two nodes are the same node
/// exactly when their identifiers are equal.
///
/// # Example
///
/// ```
/// use colorwork::core::types::Node;
///
/// let node = Node::new("no").unwrap();
/// assert_eq!(node.as_str(), "no");
///
/// assert!(Node::new("   ").is_err());
/// assert!(Node::new("a\tb").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Node(String);

impl Node {
    /// Create a new validated node identifier.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidNode` if the identifier is empty,
    /// whitespace-only, or contains control characters.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    fn validate(id: &str) -> Result<(), TypeError> {
        if id.is_empty() {
            return Err(TypeError::InvalidNode(id.to_string(), "cannot be empty"));
        }
        if id.trim().is_empty() {
            return Err(TypeError::InvalidNode(
                id.to_string(),
                "cannot be whitespace only",
            ));
        }
        if id.chars().any(|c| c.is_control()) {
            return Err(TypeError::InvalidNode(
                id.to_string(),
                "cannot contain control characters",
            ));
        }
        Ok(())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Node {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Node {
    type Error = TypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Node> for String {
    fn from(node: Node) -> Self {
        node.0
    }
}

impl AsRef<str> for Node {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A neighbour constraint: the two endpoints may never share a color.
///
/// An edge is stored in the orientation it was given, but every query
/// treats it as unordered. `(a, b)` and `(b, a)` describe the same
/// constraint.
///
/// Serialized as a two-element array, `["a", "b"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Node, Node)", into = "(Node, Node)")]
pub struct Edge {
    first: Node,
    second: Node,
}

impl Edge {
    /// Create an edge from two nodes.
    pub fn new(first: Node, second: Node) -> Self {
        Self { first, second }
    }

    /// Create an edge from two raw identifiers.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidNode` if either identifier is invalid.
    pub fn parse(first: &str, second: &str) -> Result<Self, TypeError> {
        Ok(Self::new(Node::new(first)?, Node::new(second)?))
    }

    /// The first endpoint, as given.
    pub fn first(&self) -> &Node {
        &self.first
    }

    /// The second endpoint, as given.
    pub fn second(&self) -> &Node {
        &self.second
    }

    /// Whether both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.first == self.second
    }
}

impl From<(Node, Node)> for Edge {
    fn from((first, second): (Node, Node)) -> Self {
        Self::new(first, second)
    }
}

impl From<Edge> for (Node, Node) {
    fn from(edge: Edge) -> Self {
        (edge.first, edge.second)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
