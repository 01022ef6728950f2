//! engine::verify
//!
//! Post-coloring invariant verification.
//!
//! # Invariants Checked
//!
//! A partition is valid for a relation when:
//! 1. Every node of the relation appears in some group
//! 2. No node appears more than once
//! 3. Every placed node belongs to the relation
//! 4. No group is empty
//! 5. No two distinct nodes in one group are neighbours
//!
//! Self-adjacency is never a violation: a node is not paired with itself.
//!
//! # Invariants
//!
//! - Verify is read-only
//! - Verify is deterministic: violations are reported in node-set order,
//!   then group order
//! - If verify fails on an engine-built coloring, this indicates a bug
//!
//! # Example
//!
//! ```
//! use colorwork::engine::verify::fast_verify;
//! use colorwork::engine::ColoringEngine;
//!
//! let mut engine = ColoringEngine::from_pairs([("a", "b"), ("b", "c")]).unwrap();
//! engine.color();
//! fast_verify(engine.relation(), engine.coloring()).unwrap();
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::core::coloring::Coloring;
use crate::core::graph::NeighbourRelation;
use crate::core::types::Node;

/// A single violated invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// A node of the relation is in no group.
    #[error("node {node} was not assigned a color")]
    MissingNode {
        /// The uncolored node
        node: String,
    },

    /// A node was placed more than once.
    #[error("node {node} appears {count} times (groups {groups:?})")]
    DuplicateNode {
        /// The repeated node
        node: String,
        /// Total number of placements
        count: usize,
        /// Groups holding the node, one entry per placement
        groups: Vec<usize>,
    },

    /// A placed node is not part of the relation.
    #[error("group {group} contains unknown node {node}")]
    UnknownNode {
        /// The unknown node
        node: String,
        /// The group holding it
        group: usize,
    },

    /// A group has no members.
    #[error("group {group} is empty")]
    EmptyGroup {
        /// The empty group's index
        group: usize,
    },

    /// Two neighbours share a color.
    #[error("neighbours {first} and {second} share color {group}")]
    NeighboursShareColor {
        /// The shared group
        group: usize,
        /// Earlier member
        first: String,
        /// Later member
        second: String,
    },
}

/// Result of a full verification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyResult {
    /// Whether verification passed
    pub ok: bool,
    /// Violations found, in deterministic order
    pub errors: Vec<VerifyError>,
}

impl VerifyResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: vec![],
        }
    }

    /// Create a failed result with errors.
    pub fn failure(errors: Vec<VerifyError>) -> Self {
        Self { ok: false, errors }
    }

    fn from_errors(errors: Vec<VerifyError>) -> Self {
        if errors.is_empty() {
            Self::success()
        } else {
            Self::failure(errors)
        }
    }
}

/// Collect every violation of `coloring` against `relation`.
pub fn verify_coloring(relation: &NeighbourRelation, coloring: &Coloring) -> VerifyResult {
    let mut errors = Vec::new();

    errors.extend(check_coverage(relation, coloring));
    errors.extend(check_unknown(relation, coloring));
    errors.extend(check_empty_groups(coloring));
    errors.extend(check_neighbours(relation, coloring));

    VerifyResult::from_errors(errors)
}

/// Fast verification: stop at the first violation.
///
/// # Returns
///
/// `Ok(())` if all invariants hold, the first `VerifyError` otherwise.
pub fn fast_verify(relation: &NeighbourRelation, coloring: &Coloring) -> Result<(), VerifyError> {
    let report = verify_coloring(relation, coloring);
    match report.errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Completeness and uniqueness.
fn check_coverage(relation: &NeighbourRelation, coloring: &Coloring) -> Vec<VerifyError> {
    let mut placements: HashMap<&Node, Vec<usize>> = HashMap::new();
    for (index, group) in coloring.iter().enumerate() {
        for node in group {
            placements.entry(node).or_default().push(index);
        }
    }

    let mut errors = Vec::new();
    for node in relation.nodes() {
        match placements.get(node) {
            None => errors.push(VerifyError::MissingNode {
                node: node.to_string(),
            }),
            Some(groups) if groups.len() > 1 => errors.push(VerifyError::DuplicateNode {
                node: node.to_string(),
                count: groups.len(),
                groups: groups.clone(),
            }),
            Some(_) => {}
        }
    }
    errors
}

fn check_unknown(relation: &NeighbourRelation, coloring: &Coloring) -> Vec<VerifyError> {
    let mut errors = Vec::new();
    for (index, group) in coloring.iter().enumerate() {
        for node in group {
            if !relation.contains(node) {
                errors.push(VerifyError::UnknownNode {
                    node: node.to_string(),
                    group: index,
                });
            }
        }
    }
    errors
}

fn check_empty_groups(coloring: &Coloring) -> Vec<VerifyError> {
    coloring
        .iter()
        .enumerate()
        .filter(|(_, group)| group.is_empty())
        .map(|(group, _)| VerifyError::EmptyGroup { group })
        .collect()
}

/// Validity: no pair of distinct members may be neighbours.
fn check_neighbours(relation: &NeighbourRelation, coloring: &Coloring) -> Vec<VerifyError> {
    let mut errors = Vec::new();
    for (index, group) in coloring.iter().enumerate() {
        let members = group.nodes();
        for (i, first) in members.iter().enumerate() {
            for second in &members[i + 1..] {
                if first != second && relation.are_neighbours(first, second) {
                    errors.push(VerifyError::NeighboursShareColor {
                        group: index,
                        first: first.to_string(),
                        second: second.to_string(),
                    });
                }
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coloring::ColorGroup;
    use crate::core::types::Edge;

    fn node(id: &str) -> Node {
        Node::new(id).unwrap()
    }

    fn relation(pairs: &[(&str, &str)]) -> NeighbourRelation {
        pairs
            .iter()
            .map(|(a, b)| Edge::parse(a, b).unwrap())
            .collect()
    }

    fn coloring(groups: &[&[&str]]) -> Coloring {
        groups
            .iter()
            .map(|g| ColorGroup::from(g.iter().map(|id| node(id)).collect::<Vec<_>>()))
            .collect::<Vec<_>>()
            .into()
    }

    fn path() -> NeighbourRelation {
        relation(&[("a", "b"), ("b", "a"), ("b", "c"), ("c", "b")])
    }

    mod verify_coloring {
        use super::*;

        #[test]
        fn valid_coloring_passes() {
            let result = verify_coloring(&path(), &coloring(&[&["a", "c"], &["b"]]));
            assert!(result.ok);
            assert!(result.errors.is_empty());
        }

        #[test]
        fn empty_relation_and_coloring_pass() {
            let result = verify_coloring(&NeighbourRelation::new(), &Coloring::new());
            assert!(result.ok);
        }

        #[test]
        fn missing_node_detected() {
            let result = verify_coloring(&path(), &coloring(&[&["a", "c"]]));
            assert!(!result.ok);
            assert_eq!(
                result.errors,
                vec![VerifyError::MissingNode {
                    node: "b".to_string()
                }]
            );
        }

        #[test]
        fn duplicate_across_groups_detected() {
            let result = verify_coloring(&path(), &coloring(&[&["a", "c"], &["b", "a"]]));
            assert!(result.errors.contains(&VerifyError::DuplicateNode {
                node: "a".to_string(),
                count: 2,
                groups: vec![0, 1],
            }));
        }

        #[test]
        fn duplicate_within_group_detected() {
            let result = verify_coloring(&path(), &coloring(&[&["a", "a", "c"], &["b"]]));
            assert!(result.errors.contains(&VerifyError::DuplicateNode {
                node: "a".to_string(),
                count: 2,
                groups: vec![0, 0],
            }));
        }

        #[test]
        fn unknown_node_detected() {
            let result = verify_coloring(&path(), &coloring(&[&["a", "c"], &["b", "z"]]));
            assert_eq!(
                result.errors,
                vec![VerifyError::UnknownNode {
                    node: "z".to_string(),
                    group: 1,
                }]
            );
        }

        #[test]
        fn empty_group_detected() {
            let result = verify_coloring(&path(), &coloring(&[&["a", "c"], &[], &["b"]]));
            assert_eq!(result.errors, vec![VerifyError::EmptyGroup { group: 1 }]);
        }

        #[test]
        fn neighbours_sharing_color_detected() {
            let result = verify_coloring(&path(), &coloring(&[&["a", "b", "c"]]));
            assert_eq!(
                result.errors,
                vec![
                    VerifyError::NeighboursShareColor {
                        group: 0,
                        first: "a".to_string(),
                        second: "b".to_string(),
                    },
                    VerifyError::NeighboursShareColor {
                        group: 0,
                        first: "b".to_string(),
                        second: "c".to_string(),
                    },
                ]
            );
        }

        #[test]
        fn self_loop_is_not_a_violation() {
            let relation = relation(&[("a", "a")]);
            assert!(verify_coloring(&relation, &coloring(&[&["a"]])).ok);
        }

        #[test]
        fn one_directional_edge_still_counts() {
            let relation = relation(&[("b", "a")]);
            let result = verify_coloring(&relation, &coloring(&[&["a", "b"]]));
            assert!(!result.ok);
        }
    }

    mod fast_verify {
        use super::*;

        #[test]
        fn ok_when_valid() {
            assert!(fast_verify(&path(), &coloring(&[&["a", "c"], &["b"]])).is_ok());
        }

        #[test]
        fn returns_first_violation() {
            let err = fast_verify(&path(), &coloring(&[&["a", "b", "c"]])).unwrap_err();
            assert_eq!(
                err,
                VerifyError::NeighboursShareColor {
                    group: 0,
                    first: "a".to_string(),
                    second: "b".to_string(),
                }
            );
        }
    }

    mod verify_error {
        use super::*;

        #[test]
        fn display_formatting() {
            let err = VerifyError::MissingNode {
                node: "dk".to_string(),
            };
            assert!(err.to_string().contains("dk"));
            assert!(err.to_string().contains("not assigned"));

            let err = VerifyError::DuplicateNode {
                node: "dk".to_string(),
                count: 2,
                groups: vec![0, 1],
            };
            assert!(err.to_string().contains("2 times"));

            let err = VerifyError::UnknownNode {
                node: "zz".to_string(),
                group: 3,
            };
            assert!(err.to_string().contains("unknown node zz"));

            let err = VerifyError::EmptyGroup { group: 1 };
            assert_eq!(err.to_string(), "group 1 is empty");

            let err = VerifyError::NeighboursShareColor {
                group: 0,
                first: "dk".to_string(),
                second: "se".to_string(),
            };
            assert!(err.to_string().contains("share color 0"));
        }
    }
}
