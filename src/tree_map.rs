use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::MapError;
use crate::raw::{InOrder, PreOrder, RawTreeMap};

mod capacity;
#[cfg(any(test, feature = "test-util"))]
mod test_util;

#[cfg(any(test, feature = "test-util"))]
pub use test_util::NodeId;

/// An ordered map based on an unbalanced [binary search tree].
///
/// Given a key type with a [total order], the map stores one node per key.
/// Every key in a node's left subtree orders before the node's key, and every
/// key in its right subtree orders after it. The tree is never rebalanced: its
/// shape is decided entirely by the order in which keys were first inserted.
/// Inserting keys in random order gives an expected height of O(log n), but
/// inserting them already sorted produces a chain of height n and O(n) lookups.
///
/// Nodes live in a single arena and refer to their children by index. There
/// is no recursion anywhere in the map, so degenerate trees can be searched,
/// traversed and dropped without exhausting the call stack.
///
/// Keys can never be removed individually. [`TreeMap::remove`] always fails
/// with [`MapError::Unsupported`]; use [`TreeMap::clear`] to discard everything.
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key, as determined by the [`Ord`] trait, changes while it is in the map. The behavior
/// resulting from such a logic error is not specified, but will be encapsulated to the `TreeMap`
/// that observed the logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use bst_map::TreeMap;
///
/// let mut ages = TreeMap::new();
/// ages.insert("Carol", 41);
/// ages.insert("Alice", 33);
/// ages.insert("Bob", 27);
///
/// assert_eq!(ages.get("Alice"), Some(&33));
/// assert_eq!(ages.insert("Bob", 28), Some(27));
/// assert_eq!(ages.key_set(), [&"Alice", &"Bob", &"Carol"]);
///
/// // Carol was inserted first and sits at the root, with Bob below Alice.
/// assert_eq!(ages.height(), 3);
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
pub struct TreeMap<K, V> {
    raw: RawTreeMap<K, V>,
}

/// An iterator over the entries of a `TreeMap`, in ascending key order.
///
/// The walk follows the links actually present, so it makes no claim about
/// its length up front.
///
/// This `struct` is created by the [`iter`] method on [`TreeMap`].
///
/// [`iter`]: TreeMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    raw: &'a RawTreeMap<K, V>,
    cursor: InOrder,
}

/// An iterator over the keys of a `TreeMap`, in ascending order.
///
/// This `struct` is created by the [`keys`] method on [`TreeMap`].
///
/// [`keys`]: TreeMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over every value of a `TreeMap`, parents before children.
///
/// The order is an implementation detail and is not sorted by key. Equal values
/// stored under different keys are each yielded.
///
/// This `struct` is created by the [`values`] method on [`TreeMap`].
///
/// [`values`]: TreeMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: PreOrder<'a, K, V>,
}

impl<K, V> TreeMap<K, V> {
    /// Makes a new, empty `TreeMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> TreeMap<K, V> {
        TreeMap { raw: RawTreeMap::new() }
    }

    /// Clears the map, dropping every node at once.
    ///
    /// Afterwards the map cannot be told apart from one made with [`TreeMap::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut a = TreeMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert_eq!(a.height(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// Searching an empty map returns `None`.
    ///
    /// # Complexity
    ///
    /// O(height), which is O(n) for keys inserted in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns the stored key and its value for the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(String::from("a"), 1);
    /// assert_eq!(map.get_key_value("a"), Some((&String::from("a"), &1)));
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert!(!map.contains_key(&1));
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.contains_key(key)
    }

    /// Returns `true` if any key maps to a value equal to `value`.
    ///
    /// Values may be optional; `None` then matches a stored `None`.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert("a", Some(1));
    /// map.insert("b", None);
    /// assert!(map.contains_value(&Some(1)));
    /// assert!(map.contains_value(&None));
    /// assert!(!map.contains_value(&Some(2)));
    /// ```
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.raw.contains_value(value)
    }

    /// Returns the entry with the minimum key, found by walking left from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let map = TreeMap::from([(2, "b"), (1, "a"), (3, "c")]);
    /// assert_eq!(map.first_key_value(), Some((&1, &"a")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let node = self.raw.node(self.raw.first()?);
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the maximum key, found by walking right from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let map = TreeMap::from([(2, "b"), (1, "a"), (3, "c")]);
    /// assert_eq!(map.last_key_value(), Some((&3, &"c")));
    /// ```
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let node = self.raw.node(self.raw.last()?);
        Some((&node.key, &node.value))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, a new leaf is attached and
    /// `None` is returned.
    ///
    /// If the map did have this key present, the value is replaced in place
    /// and the old value is returned. Neither the shape of the tree nor its
    /// length change. The key is not updated.
    ///
    /// # Panics
    ///
    /// Panics if the node arena is full (`u32::MAX` nodes).
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.insert("a", 1), None);
    /// assert_eq!(map.insert("a", 2), Some(1));
    /// assert_eq!(map[&"a"], 2);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        self.raw.insert(key, value)
    }

    /// Inserts every pair from `source`, in the order `source` yields them.
    ///
    /// A key that appears more than once ends up with its last value.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use bst_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put_all([("x", 1), ("y", 2), ("x", 3)]);
    /// assert_eq!(map.get("x"), Some(&3));
    ///
    /// map.put_all(HashMap::from([("z", 26)]));
    /// assert_eq!(map.len(), 3);
    /// ```
    pub fn put_all<I>(&mut self, source: I)
    where
        K: Ord,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in source {
            self.raw.insert(key, value);
        }
    }

    /// Removing a single key is not supported; this always fails.
    ///
    /// # Errors
    ///
    /// Always returns [`MapError::Unsupported`]. The map is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::{MapError, TreeMap};
    ///
    /// let mut map = TreeMap::from([(1, "a")]);
    /// assert_eq!(map.remove(&1), Err(MapError::Unsupported { operation: "remove" }));
    /// assert_eq!(map.len(), 1);
    /// ```
    #[allow(clippy::unused_self)]
    pub fn remove<Q>(&mut self, _key: &Q) -> Result<Option<V>, MapError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        Err(MapError::Unsupported { operation: "remove" })
    }

    /// An entry-set view is not supported; this always fails.
    ///
    /// Use [`TreeMap::iter`] to visit key-value pairs instead.
    ///
    /// # Errors
    ///
    /// Always returns [`MapError::Unsupported`].
    #[allow(clippy::unused_self)]
    pub fn entry_set(&self) -> Result<Iter<'_, K, V>, MapError> {
        Err(MapError::Unsupported { operation: "entry_set" })
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let map = TreeMap::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, [(&1, &"a"), (&2, &"b"), (&3, &"c")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            raw: &self.raw,
            cursor: self.raw.in_order(),
        }
    }

    /// Gets an iterator over the keys of the map, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let map = TreeMap::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<i32> = map.keys().copied().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Collects every key in ascending order.
    ///
    /// Keys are unique, so the result is a sorted set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let map = TreeMap::from([("08", 8), ("03", 3), ("10", 10)]);
    /// assert_eq!(map.key_set(), [&"03", &"08", &"10"]);
    /// ```
    #[must_use]
    pub fn key_set(&self) -> Vec<&K> {
        self.keys().collect()
    }

    /// Gets an iterator over every stored value, in no particular order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let map = TreeMap::from([(1, "x"), (2, "x")]);
    /// assert_eq!(map.values().count(), 2);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.raw.pre_order(),
        }
    }

    /// Collects the distinct values of the map.
    ///
    /// Values stored under several keys appear once. This differs from
    /// [`TreeMap::values`], which yields one value per entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let map = TreeMap::from([(1, "x"), (2, "y"), (3, "x")]);
    /// let distinct: Vec<_> = map.value_set().into_iter().collect();
    /// assert_eq!(distinct, [&"x", &"y"]);
    ///
    /// let empty: TreeMap<i32, &str> = TreeMap::new();
    /// assert!(empty.value_set().is_empty());
    /// ```
    #[must_use]
    pub fn value_set(&self) -> BTreeSet<&V>
    where
        V: Ord,
    {
        self.values().collect()
    }

    /// Collects the distinct values of the map using only `PartialEq`.
    ///
    /// Works for value types without a total order, such as `f64`. Each value
    /// is kept the first time it is met by [`TreeMap::values`].
    ///
    /// # Complexity
    ///
    /// O(n * d), where d is the number of distinct values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let map = TreeMap::from([("a", 0.5_f64), ("b", 1.5), ("c", 0.5)]);
    /// let mut distinct = map.distinct_values();
    /// distinct.sort_by(|a, b| a.total_cmp(b));
    /// assert_eq!(distinct, [&0.5, &1.5]);
    /// ```
    #[must_use]
    pub fn distinct_values(&self) -> Vec<&V>
    where
        V: PartialEq,
    {
        let mut distinct: Vec<&V> = Vec::new();
        for value in self.values() {
            if !distinct.contains(&value) {
                distinct.push(value);
            }
        }
        distinct
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let mut a = TreeMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// An empty map has height 0 and a single entry has height 1. This is a
    /// diagnostic for the shape produced by the insertion order.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let sorted: TreeMap<i32, ()> = (0..5).map(|k| (k, ())).collect();
    /// assert_eq!(sorted.height(), 5);
    ///
    /// let bushy: TreeMap<i32, ()> = [2, 1, 3].into_iter().map(|k| (k, ())).collect();
    /// assert_eq!(bushy.height(), 2);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }
}

impl<K: Clone, V: Clone> Clone for TreeMap<K, V> {
    fn clone(&self) -> Self {
        TreeMap { raw: self.raw.clone() }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for TreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for TreeMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for TreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for TreeMap<K, V> {
    fn default() -> Self {
        TreeMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreeMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = TreeMap::new();
        map.put_all(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for TreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.put_all(iter);
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for TreeMap<K, V> {
    /// Inserts the pairs in array order, so the first element becomes the root.
    fn from(arr: [(K, V); N]) -> Self {
        TreeMap::from_iter(arr)
    }
}

impl<K, Q, V> Index<&Q> for TreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `TreeMap`.
    #[inline]
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V> IntoIterator for &'a TreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.cursor.next(self.raw)?;
        let node = self.raw.node(handle);
        Some((&node.key, &node.value))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            raw: self.raw,
            cursor: self.cursor.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.inner.tree();
        self.inner.next().map(|handle| &raw.node(handle).value)
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;

    fn scenario_tree() -> TreeMap<&'static str, i32> {
        let mut map = TreeMap::new();
        for (key, value) in [
            ("08", 8),
            ("03", 3),
            ("10", 10),
            ("01", 1),
            ("06", 6),
            ("14", 14),
            ("04", 4),
            ("07", 7),
            ("13", 13),
        ] {
            assert_eq!(map.insert(key, value), None);
        }
        map
    }

    #[test]
    fn key_set_is_sorted_after_scrambled_inserts() {
        let map = scenario_tree();
        assert_eq!(map.key_set(), [&"01", &"03", &"04", &"06", &"07", &"08", &"10", &"13", &"14"]);
        assert_eq!(map.len(), 9);
        assert_eq!(map.height(), 4);
    }

    #[test]
    fn new_key_lands_between_neighbours() {
        let mut map = scenario_tree();
        assert_eq!(map.insert("05", 5), None);
        assert_eq!(map.len(), 10);
        let keys = map.key_set();
        let at = keys.iter().position(|k| **k == "05").unwrap();
        assert_eq!(*keys[at - 1], "04");
        assert_eq!(*keys[at + 1], "06");
        // "05" hangs right of "04", one level below the old deepest node.
        assert_eq!(map.height(), 5);
    }

    #[test]
    fn values_iterator_yields_every_entry() {
        let map = TreeMap::from([(1, 'x'), (2, 'y'), (3, 'x')]);
        let mut values: Vec<char> = map.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, ['x', 'x', 'y']);
        assert_eq!(map.value_set().len(), 2);
    }

    #[test]
    fn iter_is_fused_after_last_entry() {
        let map = scenario_tree();
        let mut iter = map.iter();
        assert_eq!(iter.next(), Some((&"01", &1)));
        assert_eq!(iter.by_ref().count(), 8);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn distinct_values_need_only_partial_eq() {
        let map = TreeMap::from([(2, 0.25), (1, f64::NAN), (3, 0.25), (4, -1.0)]);
        let distinct = map.distinct_values();
        // NaN never equals itself, so it is kept once per entry holding it.
        assert_eq!(distinct.len(), 3);
        assert_eq!(distinct.iter().filter(|v| ***v == 0.25).count(), 1);
        assert!(distinct.iter().any(|v| v.is_nan()));

        let empty: TreeMap<i32, f64> = TreeMap::new();
        assert!(empty.distinct_values().is_empty());
    }

    #[test]
    fn cleared_map_releases_its_nodes() {
        let mut map = scenario_tree();
        assert!(map.capacity() >= 9);
        map.clear();
        assert_eq!(map.capacity(), TreeMap::<&str, i32>::new().capacity());
        assert_eq!(map, TreeMap::new());
        map.insert("01", 1);
        assert_eq!(map.key_set(), [&"01"]);
    }

    #[test]
    fn debug_prints_in_key_order() {
        let map = TreeMap::from([(2, "b"), (1, "a")]);
        assert_eq!(format!("{map:?}"), r#"{1: "a", 2: "b"}"#);
        assert_eq!(format!("{:?}", map.keys()), "[1, 2]");
    }

    #[test]
    fn equality_ignores_shape() {
        let left = TreeMap::from([(1, ()), (2, ()), (3, ())]);
        let bushy = TreeMap::from([(2, ()), (1, ()), (3, ())]);
        assert_ne!(left.height(), bushy.height());
        assert_eq!(left, bushy);
    }

    #[test]
    fn clone_is_independent() {
        let original = scenario_tree();
        let mut copy = original.clone();
        copy.insert("99", 99);
        assert_eq!(original.len(), 9);
        assert_eq!(copy.len(), 10);
        assert!(!original.contains_key("99"));
    }

    #[test]
    #[should_panic(expected = "no entry found for key")]
    fn index_on_missing_key_panics() {
        let map: TreeMap<i32, i32> = TreeMap::new();
        let _ = map[&1];
    }
}
