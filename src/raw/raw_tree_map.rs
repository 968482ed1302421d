use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use alloc::vec::Vec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};

/// The core unbalanced binary search tree backing `TreeMap`.
#[derive(Clone)]
pub(crate) struct RawTreeMap<K, V> {
    /// Arena storing every node, reachable or not.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of key-value pairs in the tree.
    len: usize,
}

impl<K, V> RawTreeMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new, empty tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    #[cfg(any(test, feature = "test-util"))]
    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    /// Drops every node and resets the count.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Allocates a node that no other node links to. The count is untouched.
    #[cfg(any(test, feature = "test-util"))]
    pub(crate) fn alloc_detached(&mut self, key: K, value: V) -> Handle {
        self.nodes.alloc(Node::new(key, value))
    }

    /// Overwrites one child link of `parent` without checking key order.
    pub(crate) fn set_child(&mut self, parent: Handle, side: Side, child: Option<Handle>) {
        *self.nodes.get_mut(parent).child_mut(side) = child;
    }

    /// Overwrites the root and the count without checking either.
    #[cfg(any(test, feature = "test-util"))]
    pub(crate) fn set_root(&mut self, root: Option<Handle>, len: usize) {
        self.root = root;
        self.len = len;
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        let mut height = 0;
        let mut stack: Vec<(Handle, usize)> = Vec::new();
        stack.push((root, 1));

        while let Some((handle, depth)) = stack.pop() {
            let node = self.nodes.get(handle);
            // Every longest path ends at a leaf.
            if node.is_leaf() {
                height = height.max(depth);
            }
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }

        height
    }

    /// Returns the leftmost node, which holds the minimum key.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.spine(Side::Left)
    }

    /// Returns the rightmost node, which holds the maximum key.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.spine(Side::Right)
    }

    fn spine(&self, side: Side) -> Option<Handle> {
        let mut current = self.root?;
        while let Some(next) = self.nodes.get(current).child(side) {
            current = next;
        }
        Some(current)
    }

    /// Returns true if any reachable node holds a value equal to `target`.
    pub(crate) fn contains_value(&self, target: &V) -> bool
    where
        V: PartialEq,
    {
        self.pre_order().any(|handle| self.nodes.get(handle).value == *target)
    }

    /// Returns a cursor yielding nodes in ascending key order.
    pub(crate) fn in_order(&self) -> InOrder {
        let mut cursor = InOrder { stack: Vec::new() };
        cursor.descend_left(self, self.root);
        cursor
    }

    /// Returns a cursor yielding each node before its subtrees.
    pub(crate) fn pre_order(&self) -> PreOrder<'_, K, V> {
        PreOrder {
            raw: self,
            stack: self.root.into_iter().collect(),
        }
    }
}

impl<K: Ord, V> RawTreeMap<K, V> {
    /// Walks from the root towards `key`, returning the node holding it.
    ///
    /// An empty tree has nothing to walk and reports not found.
    pub(crate) fn find_node<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root?;

        loop {
            let node = self.nodes.get(current);
            let side = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(current),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            current = node.child(side)?;
        }
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.find_node(key)?;
        Some(&self.nodes.get(handle).value)
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.nodes.get(self.find_node(key)?);
        Some((&node.key, &node.value))
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.find_node(key)?;
        Some(&mut self.nodes.get_mut(handle).value)
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find_node(key).is_some()
    }

    /// Inserts a key-value pair in a single descent.
    ///
    /// An equal key keeps its node and has its value swapped; the old value is
    /// returned. Otherwise a new leaf is hung off the first empty child slot on
    /// the search path and the count grows by one.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.alloc(Node::new(key, value)));
            self.len += 1;
            return None;
        };

        loop {
            let node = self.nodes.get(current);
            let side = match key.cmp(&node.key) {
                Ordering::Equal => {
                    let slot = &mut self.nodes.get_mut(current).value;
                    return Some(mem::replace(slot, value));
                }
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };

            match node.child(side) {
                Some(next) => current = next,
                None => {
                    let leaf = self.nodes.alloc(Node::new(key, value));
                    self.set_child(current, side, Some(leaf));
                    self.len += 1;
                    return None;
                }
            }
        }
    }
}

/// Explicit-stack in-order traversal state.
///
/// The cursor holds no borrow, so the caller passes the tree on every step.
#[derive(Clone, Debug, Default)]
pub(crate) struct InOrder {
    stack: Vec<Handle>,
}

impl InOrder {
    fn descend_left<K, V>(&mut self, raw: &RawTreeMap<K, V>, mut current: Option<Handle>) {
        while let Some(handle) = current {
            self.stack.push(handle);
            current = raw.node(handle).left;
        }
    }

    /// Returns the next node in key order.
    pub(crate) fn next<K, V>(&mut self, raw: &RawTreeMap<K, V>) -> Option<Handle> {
        let handle = self.stack.pop()?;
        self.descend_left(raw, raw.node(handle).right);
        Some(handle)
    }
}

/// Explicit-stack pre-order traversal over a borrowed tree.
pub(crate) struct PreOrder<'a, K, V> {
    raw: &'a RawTreeMap<K, V>,
    stack: Vec<Handle>,
}

impl<'a, K, V> PreOrder<'a, K, V> {
    /// Returns the tree being walked, for resolving yielded handles.
    pub(crate) const fn tree(&self) -> &'a RawTreeMap<K, V> {
        self.raw
    }
}

impl<K, V> Iterator for PreOrder<'_, K, V> {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        let handle = self.stack.pop()?;
        let node = self.raw.node(handle);
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(handle)
    }
}

impl<K, V> Clone for PreOrder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw,
            stack: self.stack.clone(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use proptest::prelude::*;

    fn keys_in_order<K: Clone, V>(raw: &RawTreeMap<K, V>) -> Vec<K> {
        let mut cursor = raw.in_order();
        let mut keys = Vec::new();
        while let Some(handle) = cursor.next(raw) {
            keys.push(raw.node(handle).key.clone());
        }
        keys
    }

    fn build(keys: &[i32]) -> RawTreeMap<i32, i32> {
        let mut raw = RawTreeMap::new();
        for &k in keys {
            raw.insert(k, k * 10);
        }
        raw
    }

    #[test]
    fn empty_tree_search_reports_not_found() {
        let raw: RawTreeMap<i32, i32> = RawTreeMap::new();
        assert_eq!(raw.find_node(&1), None);
        assert_eq!(raw.get(&1), None);
        assert!(!raw.contains_key(&1));
        assert_eq!(raw.height(), 0);
        assert_eq!(raw.first(), None);
        assert_eq!(raw.last(), None);
        assert_eq!(raw.pre_order().count(), 0);
    }

    #[test]
    fn first_insert_becomes_root() {
        let mut raw = RawTreeMap::new();
        assert_eq!(raw.insert(4, "four"), None);
        let root = raw.root().unwrap();
        assert_eq!(raw.node(root).key, 4);
        assert!(raw.node(root).is_leaf());
        assert_eq!(raw.len(), 1);
    }

    #[test]
    fn shape_follows_insertion_order() {
        let raw = build(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
        let root = raw.node(raw.root().unwrap());
        assert_eq!(root.key, 8);
        assert_eq!(raw.node(root.left.unwrap()).key, 3);
        assert_eq!(raw.node(root.right.unwrap()).key, 10);
        let ten = raw.node(root.right.unwrap());
        assert_eq!(ten.left, None);
        assert_eq!(raw.node(ten.right.unwrap()).key, 14);
        assert_eq!(raw.height(), 4);
    }

    #[test]
    fn duplicate_insert_swaps_value_in_place() {
        let mut raw = build(&[5, 2, 8]);
        let before = raw.find_node(&8);
        assert_eq!(raw.insert(8, 0), Some(80));
        assert_eq!(raw.find_node(&8), before);
        assert_eq!(raw.get(&8), Some(&0));
        assert_eq!(raw.len(), 3);
    }

    #[test]
    fn search_stops_at_missing_child() {
        let raw = build(&[5, 2, 8]);
        assert!(!raw.contains_key(&1));
        assert!(!raw.contains_key(&3));
        assert!(!raw.contains_key(&9));
    }

    #[test]
    fn first_and_last_walk_the_spines() {
        let raw = build(&[5, 2, 8, 1, 9, 7]);
        assert_eq!(raw.node(raw.first().unwrap()).key, 1);
        assert_eq!(raw.node(raw.last().unwrap()).key, 9);
    }

    #[test]
    fn pre_order_visits_root_first() {
        let raw = build(&[5, 2, 8, 1, 3]);
        let keys: Vec<i32> = raw.pre_order().map(|h| raw.node(h).key).collect();
        assert_eq!(keys, [5, 2, 1, 3, 8]);
    }

    #[test]
    fn degenerate_chain_does_not_recurse() {
        let keys: Vec<i32> = (0..5_000).collect();
        let raw = build(&keys);
        assert_eq!(raw.height(), 5_000);
        assert_eq!(keys_in_order(&raw), keys);
        assert_eq!(raw.pre_order().count(), 5_000);
    }

    #[test]
    fn hand_linked_nodes_only_count_once_reachable() {
        let mut raw = RawTreeMap::new();
        let root = raw.alloc_detached(2, ());
        let left = raw.alloc_detached(1, ());
        assert_eq!(raw.root(), None);
        assert_eq!(raw.len(), 0);

        raw.set_child(root, Side::Left, Some(left));
        raw.set_root(Some(root), 2);
        assert_eq!(raw.height(), 2);
        assert_eq!(keys_in_order(&raw), [1, 2]);
        assert_eq!(raw.len(), 2);
    }

    #[test]
    fn clear_resets_everything() {
        let mut raw = build(&[3, 1, 2]);
        raw.clear();
        assert!(raw.is_empty());
        assert_eq!(raw.root(), None);
        assert_eq!(raw.height(), 0);
        assert_eq!(raw.insert(1, 1), None);
        assert_eq!(raw.len(), 1);
    }

    proptest! {
        #[test]
        fn insert_matches_btreemap(entries in prop::collection::vec((-200i32..200, any::<i32>()), 0..512)) {
            let mut raw = RawTreeMap::new();
            let mut model = BTreeMap::new();

            for (k, v) in entries {
                prop_assert_eq!(raw.insert(k, v), model.insert(k, v));
                prop_assert_eq!(raw.len(), model.len());
            }

            let keys: Vec<i32> = model.keys().copied().collect();
            prop_assert_eq!(keys_in_order(&raw), keys);
            for (k, v) in &model {
                prop_assert_eq!(raw.get(k), Some(v));
            }
            prop_assert!(raw.height() <= raw.len());
        }
    }
}
