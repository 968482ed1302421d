use super::handle::Handle;

/// A single key/value record with links to its left and right subtrees.
///
/// Keys in the left subtree order before `key`, keys in the right subtree
/// order after it. Nodes built through the test hooks may break this.
#[derive(Clone, Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
}

impl<K, V> Node<K, V> {
    /// Creates a detached leaf.
    pub(crate) const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    /// Returns true if neither child link is set.
    pub(crate) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the child link on the given side.
    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Returns the child slot on the given side for in-place linking.
    #[inline]
    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<Handle> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Which child link of a node to follow.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_leaf() {
        let node = Node::new("k", 1);
        assert!(node.is_leaf());
        assert_eq!(node.child(Side::Left), None);
        assert_eq!(node.child(Side::Right), None);
    }

    #[test]
    fn linking_either_side_makes_it_internal() {
        for side in [Side::Left, Side::Right] {
            let mut node = Node::new(5, ());
            *node.child_mut(side) = Some(Handle::from_index(3));
            assert!(!node.is_leaf());
            assert_eq!(node.child(side), Some(Handle::from_index(3)));
        }
    }
}
