//! engine
//!
//! The greedy first-fit coloring engine.
//!
//! # Architecture
//!
//! An engine owns three things:
//!
//! 1. **Relation**: the neighbour relation, fixed at construction
//! 2. **Order**: the node set in processing order, fixed at construction
//! 3. **Coloring**: the partition, built by a single coloring pass
//!
//! # Lifecycle
//!
//! ```text
//! Construct (validate, derive node set) -> Color (one pass) -> Query
//! ```
//!
//! Construction is the only fallible step. The coloring pass never fails and
//! runs at most once; later calls return the partition already built.
//! Queries before the pass see an empty partition.
//!
//! # Invariants
//!
//! - Every node appears in exactly one group after the pass
//! - No two distinct neighbours share a group
//! - No group is empty
//! - The same input and options always produce the same partition
//!
//! # Example
//!
//! ```
//! use colorwork::engine::ColoringEngine;
//!
//! let mut engine = ColoringEngine::from_pairs([
//!     ("a", "b"), ("b", "a"),
//!     ("b", "c"), ("c", "b"),
//! ]).unwrap();
//!
//! assert!(engine.coloring().is_empty());
//!
//! let coloring = engine.color();
//! assert_eq!(coloring.to_string(), "[[a, c], [b]]");
//! ```

pub mod modes;
pub mod placement;
pub mod verify;

pub use modes::{EngineOptions, ModeError, NodeOrder, SelfLoopPolicy};
pub use verify::{fast_verify, verify_coloring, VerifyError, VerifyResult};

use tracing::{debug, info};

use crate::core::coloring::Coloring;
use crate::core::graph::NeighbourRelation;
use crate::core::types::{Edge, Node, TypeError};

/// Errors from engine construction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    /// An endpoint identifier is not a valid node.
    #[error("malformed edge #{index}: {source}")]
    InvalidNode {
        /// Zero-based position of the edge in the input
        index: usize,
        #[source]
        source: TypeError,
    },

    /// The relation contains a self-loop and the policy rejects them.
    #[error("node {node} neighbours itself and can never be colored")]
    SelfLoop {
        /// The first self-looped node in input order
        node: String,
    },
}

/// Greedy first-fit coloring over a fixed neighbour relation.
#[derive(Debug, Clone)]
pub struct ColoringEngine {
    relation: NeighbourRelation,
    order: Vec<Node>,
    options: EngineOptions,
    coloring: Coloring,
    colored: bool,
}

impl ColoringEngine {
    /// Construct an engine with default options.
    ///
    /// # Errors
    ///
    /// Only fails under a rejecting self-loop policy, so never with defaults.
    pub fn new(edges: impl IntoIterator<Item = Edge>) -> Result<Self, EngineError> {
        Self::with_options(edges, EngineOptions::default())
    }

    /// Construct an engine with explicit options.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::SelfLoop` if the relation has a self-loop and
    /// `options.self_loops` is `Reject`.
    pub fn with_options(
        edges: impl IntoIterator<Item = Edge>,
        options: EngineOptions,
    ) -> Result<Self, EngineError> {
        let relation = NeighbourRelation::from_edges(edges);

        if options.self_loops == SelfLoopPolicy::Reject {
            if let Some(edge) = relation.self_loops().next() {
                return Err(EngineError::SelfLoop {
                    node: edge.first().to_string(),
                });
            }
        }

        let order = match options.node_order {
            NodeOrder::FirstAppearance => relation.nodes().to_vec(),
            NodeOrder::Sorted => relation.sorted_nodes(),
        };

        debug!(
            nodes = order.len(),
            edges = relation.edges().len(),
            order = %options.node_order,
            self_loops = %options.self_loops,
            "constructed coloring engine"
        );

        Ok(Self {
            relation,
            order,
            options,
            coloring: Coloring::new(),
            colored: false,
        })
    }

    /// Construct an engine from raw identifier pairs with default options.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidNode` if an identifier is empty,
    /// whitespace-only, or contains control characters.
    pub fn from_pairs<I, A, B>(pairs: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        Self::from_pairs_with_options(pairs, EngineOptions::default())
    }

    /// Construct an engine from raw identifier pairs with explicit options.
    pub fn from_pairs_with_options<I, A, B>(
        pairs: I,
        options: EngineOptions,
    ) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let edges = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (a, b))| {
                Edge::parse(a.as_ref(), b.as_ref())
                    .map_err(|source| EngineError::InvalidNode { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::with_options(edges, options)
    }

    /// Run the coloring pass and return the partition.
    ///
    /// The pass runs once. Later calls return the existing partition.
    pub fn color(&mut self) -> &Coloring {
        if !self.colored {
            let mut coloring = Coloring::new();
            for node in &self.order {
                placement::place(&self.relation, &mut coloring, node);
            }
            info!(
                nodes = self.order.len(),
                colors = coloring.len(),
                "coloring pass complete"
            );
            self.coloring = coloring;
            self.colored = true;
        }
        &self.coloring
    }

    /// The partition. Empty until [`color`](Self::color) has run.
    pub fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    /// Whether the coloring pass has run.
    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// The node set in processing order.
    pub fn nodes(&self) -> &[Node] {
        &self.order
    }

    /// The input edges, duplicates intact.
    pub fn edges(&self) -> &[Edge] {
        self.relation.edges()
    }

    /// The neighbour relation.
    pub fn relation(&self) -> &NeighbourRelation {
        &self.relation
    }

    /// The options the engine was built with.
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Whether two nodes are neighbours, in either orientation.
    pub fn are_neighbours(&self, a: &Node, b: &Node) -> bool {
        self.relation.are_neighbours(a, b)
    }

    /// Verify the current partition against the relation.
    pub fn verify(&self) -> VerifyResult {
        verify_coloring(&self.relation, &self.coloring)
    }

    /// Consume the engine and keep only the partition.
    pub fn into_coloring(self) -> Coloring {
        self.coloring
    }
}
