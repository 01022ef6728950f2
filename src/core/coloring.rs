//! core::coloring
//!
//! The partition produced by a coloring pass.
//!
//! A [`Coloring`] is an ordered list of [`ColorGroup`]s, each an ordered
//! list of nodes. Group order is creation order and member order is
//! placement order, so two colorings compare equal only if they were built
//! the same way.
//!
//! # Rendering
//!
//! `Display` renders `[[a, c], [b]]`. Serde renders the same shape as nested
//! JSON arrays. Neither is a storage format.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::Node;

/// One color: a list of nodes that share it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorGroup {
    nodes: Vec<Node>,
}

impl ColorGroup {
    /// Create a group holding a single node.
    pub fn singleton(node: Node) -> Self {
        Self { nodes: vec![node] }
    }

    /// Append a node to the group.
    pub(crate) fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Members in placement order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.nodes.contains(node)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

impl From<Vec<Node>> for ColorGroup {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl<'a> IntoIterator for &'a ColorGroup {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl fmt::Display for ColorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, "]")
    }
}

/// An ordered partition of nodes into color groups.
///
/// # Example
///
/// ```
/// use colorwork::core::coloring::{ColorGroup, Coloring};
/// use colorwork::core::types::Node;
///
/// let a = Node::new("a").unwrap();
/// let b = Node::new("b").unwrap();
/// let c = Node::new("c").unwrap();
///
/// let coloring = Coloring::from(vec![
///     ColorGroup::from(vec![a.clone(), c.clone()]),
///     ColorGroup::singleton(b.clone()),
/// ]);
///
/// assert_eq!(coloring.len(), 2);
/// assert_eq!(coloring.color_of(&c), Some(0));
/// assert_eq!(coloring.to_string(), "[[a, c], [b]]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coloring {
    groups: Vec<ColorGroup>,
}

impl Coloring {
    /// Create an empty coloring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of groups (colors).
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in creation order.
    pub fn groups(&self) -> &[ColorGroup] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&ColorGroup> {
        self.groups.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorGroup> {
        self.groups.iter()
    }

    /// Index of the first group containing `node`.
    pub fn color_of(&self, node: &Node) -> Option<usize> {
        self.groups.iter().position(|g| g.contains(node))
    }

    /// Total number of placements across all groups.
    pub fn node_count(&self) -> usize {
        self.groups.iter().map(ColorGroup::len).sum()
    }

    /// Add `node` to the group at `index`.
    ///
    /// Panics if `index` is out of bounds.
    pub(crate) fn extend_group(&mut self, index: usize, node: Node) {
        self.groups[index].push(node);
    }

    /// Append a new singleton group and return its index.
    pub(crate) fn open_group(&mut self, node: Node) -> usize {
        self.groups.push(ColorGroup::singleton(node));
        self.groups.len() - 1
    }

    /// Plain nested-list form of the partition.
    pub fn to_lists(&self) -> Vec<Vec<String>> {
        self.groups
            .iter()
            .map(|g| g.iter().map(|n| n.as_str().to_string()).collect())
            .collect()
    }
}

impl From<Vec<ColorGroup>> for Coloring {
    fn from(groups: Vec<ColorGroup>) -> Self {
        Self { groups }
    }
}

impl<'a> IntoIterator for &'a Coloring {
    type Item = &'a ColorGroup;
    type IntoIter = std::slice::Iter<'a, ColorGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl fmt::Display for Coloring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", group)?;
        }
        write!(f, "]")
    }
}
