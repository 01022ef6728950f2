//! core::graph
//!
//! Neighbour relation representation and adjacency queries.
//!
//! # Architecture
//!
//! The neighbour relation is an undirected graph where:
//! - Nodes are the distinct endpoints of all input edges
//! - Edges are stored as given (duplicates intact) and interpreted symmetrically
//! - An adjacency index is derived from the edges for constant-time lookups
//!
//! # Invariants
//!
//! - The node set is in first-appearance order: edges are visited in input
//!   order, and within an edge the first endpoint before the second
//! - `are_neighbours(a, b) == are_neighbours(b, a)`
//! - A node neighbours itself only if a self-loop edge was given
//! - The relation is immutable once built

use super::types::{Edge, Node};
use std::collections::{HashMap, HashSet};

/// A symmetric neighbour relation over a set of nodes.
///
/// Built once from an edge list and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct NeighbourRelation {
    /// Edges as given, duplicates and mirrors intact
    edges: Vec<Edge>,
    /// Distinct endpoints in first-appearance order
    nodes: Vec<Node>,
    /// Derived adjacency sets (both orientations)
    adjacency: HashMap<Node, HashSet<Node>>,
}

impl NeighbourRelation {
    /// Create an empty relation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a relation from an edge list.
    ///
    /// # Example
    ///
    /// ```
    /// use colorwork::core::graph::NeighbourRelation;
    /// use colorwork::core::types::{Edge, Node};
    ///
    /// let relation = NeighbourRelation::from_edges(vec![
    ///     Edge::parse("b", "a").unwrap(),
    ///     Edge::parse("a", "c").unwrap(),
    /// ]);
    ///
    /// let order: Vec<&str> = relation.nodes().iter().map(Node::as_str).collect();
    /// assert_eq!(order, vec!["b", "a", "c"]);
    /// ```
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        let edges: Vec<Edge> = edges.into_iter().collect();
        let mut nodes = Vec::new();
        let mut seen = HashSet::new();
        let mut adjacency: HashMap<Node, HashSet<Node>> = HashMap::new();

        for edge in &edges {
            for endpoint in [edge.first(), edge.second()] {
                if seen.insert(endpoint.clone()) {
                    nodes.push(endpoint.clone());
                }
            }

            adjacency
                .entry(edge.first().clone())
                .or_default()
                .insert(edge.second().clone());
            adjacency
                .entry(edge.second().clone())
                .or_default()
                .insert(edge.first().clone());
        }

        Self {
            edges,
            nodes,
            adjacency,
        }
    }

    /// Check whether two nodes are neighbours, in either orientation.
    ///
    /// # Example
    ///
    /// ```
    /// use colorwork::core::graph::NeighbourRelation;
    /// use colorwork::core::types::{Edge, Node};
    ///
    /// let relation = NeighbourRelation::from_edges(vec![Edge::parse("a", "b").unwrap()]);
    /// let a = Node::new("a").unwrap();
    /// let b = Node::new("b").unwrap();
    ///
    /// assert!(relation.are_neighbours(&a, &b));
    /// assert!(relation.are_neighbours(&b, &a));
    /// assert!(!relation.are_neighbours(&a, &a));
    /// ```
    pub fn are_neighbours(&self, a: &Node, b: &Node) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbours| neighbours.contains(b))
    }

    fn neighbours(&self, node: &Node) -> Option<&HashSet<Node>> {
        self.adjacency.get(node)
    }

    /// Number of distinct neighbours of a node (a self-loop counts once).
    pub fn degree(&self, node: &Node) -> usize {
        self.neighbours(node).map_or(0, HashSet::len)
    }

    /// Largest degree in the relation, or zero when empty.
    pub fn max_degree(&self) -> usize {
        self.nodes.iter().map(|n| self.degree(n)).max().unwrap_or(0)
    }

    /// Whether the node is an endpoint of some edge.
    pub fn contains(&self, node: &Node) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Distinct nodes in first-appearance order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Distinct nodes sorted by identifier.
    pub fn sorted_nodes(&self) -> Vec<Node> {
        let mut nodes = self.nodes.clone();
        nodes.sort();
        nodes
    }

    /// Edges as given, duplicates intact.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Self-loop edges in input order.
    pub fn self_loops(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.is_self_loop())
    }

    /// Whether the relation has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl FromIterator<Edge> for NeighbourRelation {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> Node {
        Node::new(id).unwrap()
    }

    fn relation(pairs: &[(&str, &str)]) -> NeighbourRelation {
        pairs
            .iter()
            .map(|(a, b)| Edge::parse(a, b).unwrap())
            .collect()
    }

    fn ids(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(Node::as_str).collect()
    }

    #[test]
    fn empty_relation_has_no_nodes() {
        let relation = NeighbourRelation::new();
        assert!(relation.is_empty());
        assert!(relation.nodes().is_empty());
        assert_eq!(relation.max_degree(), 0);
    }

    #[test]
    fn nodes_in_first_appearance_order() {
        let relation = relation(&[("da", "se"), ("no", "da"), ("se", "no"), ("de", "da")]);
        assert_eq!(ids(relation.nodes()), vec!["da", "se", "no", "de"]);
    }

    #[test]
    fn nodes_are_distinct() {
        let relation = relation(&[("a", "b"), ("b", "a"), ("a", "b")]);
        assert_eq!(ids(relation.nodes()), vec!["a", "b"]);
    }

    #[test]
    fn sorted_nodes_ignores_input_order() {
        let relation = relation(&[("c", "a"), ("b", "a")]);
        assert_eq!(ids(&relation.sorted_nodes()), vec!["a", "b", "c"]);
    }

    #[test]
    fn edges_kept_with_duplicates() {
        let relation = relation(&[("a", "b"), ("a", "b"), ("b", "a")]);
        assert_eq!(relation.edges().len(), 3);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let relation = relation(&[("a", "b"), ("c", "b")]);
        assert!(relation.are_neighbours(&node("a"), &node("b")));
        assert!(relation.are_neighbours(&node("b"), &node("a")));
        assert!(relation.are_neighbours(&node("b"), &node("c")));
        assert!(!relation.are_neighbours(&node("a"), &node("c")));
    }

    #[test]
    fn node_not_its_own_neighbour_without_self_loop() {
        let relation = relation(&[("a", "b")]);
        assert!(!relation.are_neighbours(&node("a"), &node("a")));
    }

    #[test]
    fn self_loop_makes_node_its_own_neighbour() {
        let relation = relation(&[("a", "a"), ("a", "b")]);
        assert!(relation.are_neighbours(&node("a"), &node("a")));
        assert_eq!(relation.self_loops().count(), 1);
        assert_eq!(ids(relation.nodes()), vec!["a", "b"]);
    }

    #[test]
    fn unknown_nodes_are_not_neighbours() {
        let relation = relation(&[("a", "b")]);
        assert!(!relation.are_neighbours(&node("x"), &node("y")));
        assert!(!relation.contains(&node("x")));
    }

    #[test]
    fn degree_counts_distinct_neighbours() {
        let relation = relation(&[("a", "b"), ("b", "a"), ("a", "c"), ("a", "b")]);
        assert_eq!(relation.degree(&node("a")), 2);
        assert_eq!(relation.degree(&node("b")), 1);
        assert_eq!(relation.degree(&node("x")), 0);
        assert_eq!(relation.max_degree(), 2);
    }
}
