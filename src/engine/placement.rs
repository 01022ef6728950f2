//! engine::placement
//!
//! The first-fit placement step.
//!
//! Each call places one candidate into an owned [`Coloring`] accumulator:
//! groups are scanned in creation order and the candidate joins the first
//! group with no member adjacent to it. If every group conflicts, a new
//! singleton group is appended after all existing ones.
//!
//! # Invariants
//!
//! - Never backtracks or moves an already placed node
//! - Never creates an empty group
//! - Self-adjacency is not consulted; policy is applied at construction

use tracing::debug;

use crate::core::coloring::{ColorGroup, Coloring};
use crate::core::graph::NeighbourRelation;
use crate::core::types::Node;

/// Whether `candidate` may join `group` without sharing a color with a neighbour.
pub fn group_accepts(relation: &NeighbourRelation, group: &ColorGroup, candidate: &Node) -> bool {
    group
        .iter()
        .filter(|member| *member != candidate)
        .all(|member| !relation.are_neighbours(member, candidate))
}

/// Place `candidate` into the first compatible group and return that group's index.
pub fn place(relation: &NeighbourRelation, coloring: &mut Coloring, candidate: &Node) -> usize {
    let mut index = 0;
    while let Some(group) = coloring.group(index) {
        if group_accepts(relation, group, candidate) {
            coloring.extend_group(index, candidate.clone());
            debug!(node = %candidate, color = index, "placed in existing group");
            return index;
        }
        index += 1;
    }

    let index = coloring.open_group(candidate.clone());
    debug!(node = %candidate, color = index, "opened new group");
    index
}
