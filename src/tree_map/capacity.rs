use super::TreeMap;
use crate::raw::RawTreeMap;

impl<K, V> TreeMap<K, V> {
    /// Creates an empty map with room for at least `capacity` nodes before the
    /// node arena reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::TreeMap;
    ///
    /// let map: TreeMap<i32, i32> = TreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TreeMap {
            raw: RawTreeMap::with_capacity(capacity),
        }
    }

    /// Returns the number of nodes the arena can hold without reallocating.
    ///
    /// Detached nodes made through the test hooks occupy capacity too.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
