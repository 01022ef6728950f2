//! Property-based tests for the coloring engine.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated edge lists.

use std::collections::HashSet;

use proptest::prelude::*;

use colorwork::core::types::{Edge, Node};
use colorwork::engine::{
    fast_verify, verify_coloring, ColoringEngine, EngineOptions, NodeOrder, SelfLoopPolicy,
};

/// Strategy for generating node identifiers from a small alphabet, so that
/// generated edges share endpoints often.
fn node_id() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "a", "b", "c", "d", "e", "f", "g", "h", "da", "se", "no", "de",
    ])
    .prop_map(str::to_string)
}

/// Strategy for generating edge lists, self-loops included.
fn edge_list() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((node_id(), node_id()), 0..40)
}

fn edges(pairs: &[(String, String)]) -> Vec<Edge> {
    pairs
        .iter()
        .map(|(a, b)| Edge::parse(a, b).unwrap())
        .collect()
}

fn engine(pairs: &[(String, String)], options: EngineOptions) -> ColoringEngine {
    ColoringEngine::with_options(edges(pairs), options).unwrap()
}

fn orders() -> impl Strategy<Value = NodeOrder> {
    prop_oneof![Just(NodeOrder::FirstAppearance), Just(NodeOrder::Sorted)]
}

proptest! {
    /// Every node is placed exactly once and no group is empty.
    #[test]
    fn partition_is_complete(pairs in edge_list(), order in orders()) {
        let mut engine = engine(&pairs, EngineOptions::default().node_order(order));
        let coloring = engine.color().clone();

        let expected: HashSet<&Node> = engine.nodes().iter().collect();
        let placed: Vec<&Node> = coloring.iter().flat_map(|g| g.iter()).collect();
        let unique: HashSet<&Node> = placed.iter().copied().collect();

        prop_assert_eq!(placed.len(), unique.len());
        prop_assert_eq!(unique, expected);
        prop_assert!(coloring.iter().all(|g| !g.is_empty()));
    }

    /// No two distinct neighbours share a group.
    #[test]
    fn partition_is_valid(pairs in edge_list(), order in orders()) {
        let mut engine = engine(&pairs, EngineOptions::default().node_order(order));
        let coloring = engine.color().clone();

        for group in coloring.iter() {
            for a in group.iter() {
                for b in group.iter() {
                    if a != b {
                        prop_assert!(!engine.are_neighbours(a, b), "{} and {} share a color", a, b);
                    }
                }
            }
        }
        prop_assert!(verify_coloring(engine.relation(), &coloring).ok);
        prop_assert!(fast_verify(engine.relation(), &coloring).is_ok());
    }

    /// The same input always produces the same partition.
    #[test]
    fn coloring_is_deterministic(pairs in edge_list(), order in orders()) {
        let options = EngineOptions::default().node_order(order);
        let mut first = engine(&pairs, options);
        let mut second = engine(&pairs, options);
        prop_assert_eq!(first.color(), second.color());
    }

    /// Running the pass again returns the partition already built.
    #[test]
    fn coloring_runs_once(pairs in edge_list()) {
        let mut engine = engine(&pairs, EngineOptions::default());
        let first = engine.color().clone();
        prop_assert_eq!(engine.color(), &first);
    }

    /// Repeating edges does not change the partition.
    #[test]
    fn duplicate_edges_are_invariant(pairs in edge_list()) {
        let mut doubled = pairs.clone();
        doubled.extend(pairs.iter().cloned());

        let mut plain = engine(&pairs, EngineOptions::default());
        let mut repeated = engine(&doubled, EngineOptions::default());
        prop_assert_eq!(plain.color(), repeated.color());
    }

    /// Appending the mirror of each edge does not change the partition.
    #[test]
    fn mirrored_edges_are_invariant(pairs in edge_list()) {
        let mut with_mirrors = pairs.clone();
        with_mirrors.extend(pairs.iter().map(|(a, b)| (b.clone(), a.clone())));

        let mut plain = engine(&pairs, EngineOptions::default());
        let mut mirrored = engine(&with_mirrors, EngineOptions::default());
        prop_assert_eq!(plain.color(), mirrored.color());
    }

    /// First-fit never needs more than max degree + 1 colors.
    #[test]
    fn colors_bounded_by_max_degree(pairs in edge_list()) {
        let mut engine = engine(&pairs, EngineOptions::default());
        let bound = engine.relation().max_degree() + 1;
        prop_assert!(engine.color().len() <= bound);
    }

    /// Reject fails exactly when a self-loop is present.
    #[test]
    fn reject_matches_self_loop_presence(pairs in edge_list()) {
        let has_loop = pairs.iter().any(|(a, b)| a == b);
        let options = EngineOptions::default().self_loops(SelfLoopPolicy::Reject);
        let result = ColoringEngine::with_options(edges(&pairs), options);
        prop_assert_eq!(result.is_err(), has_loop);
    }

    /// The node set has no duplicates and covers every endpoint.
    #[test]
    fn node_set_covers_endpoints(pairs in edge_list()) {
        let engine = engine(&pairs, EngineOptions::default());
        let nodes: HashSet<&str> = engine.nodes().iter().map(Node::as_str).collect();

        prop_assert_eq!(nodes.len(), engine.nodes().len());
        for (a, b) in &pairs {
            prop_assert!(nodes.contains(a.as_str()));
            prop_assert!(nodes.contains(b.as_str()));
        }
    }
}
