//! Construction hooks that bypass the map's invariants.
//!
//! These exist so tests can assemble an exact tree shape without depending on
//! insertion order. Nothing here checks key order, reachability or the stored
//! length. A tree assembled by hand may violate the search-tree ordering (in
//! which case lookups can miss present keys), may leave `len()` disagreeing with
//! the number of reachable nodes, and, if a node is linked below itself, makes
//! every traversal loop forever.

use super::TreeMap;
use crate::raw::{Handle, Side};

/// Identifies a node allocated in a particular [`TreeMap`]'s arena.
///
/// Using an id with a map other than the one that made it either panics or
/// refers to an unrelated node.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(Handle);

impl<K, V> TreeMap<K, V> {
    /// Allocates a node that is not linked into the tree.
    ///
    /// The node is unreachable and the map's length is unchanged until it is
    /// attached with [`set_left`](Self::set_left), [`set_right`](Self::set_right)
    /// or [`set_tree`](Self::set_tree).
    pub fn make_node(&mut self, key: K, value: V) -> NodeId {
        NodeId(self.raw.alloc_detached(key, value))
    }

    /// Sets or clears the left child of `parent`, discarding any previous link.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not allocated by this map.
    pub fn set_left(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.raw.set_child(parent.0, Side::Left, child.map(|c| c.0));
    }

    /// Sets or clears the right child of `parent`, discarding any previous link.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not allocated by this map.
    pub fn set_right(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.raw.set_child(parent.0, Side::Right, child.map(|c| c.0));
    }

    /// Replaces the root and the reported length, unchecked.
    ///
    /// Nodes made earlier stay allocated even if they are no longer reachable.
    /// Only [`len`](Self::len) and [`is_empty`](Self::is_empty) report `len`;
    /// iteration and [`height`](Self::height) follow the links.
    pub fn set_tree(&mut self, root: Option<NodeId>, len: usize) {
        self.raw.set_root(root.map(|r| r.0), len);
    }

    /// Returns the current root node.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.raw.root().map(NodeId)
    }
}
