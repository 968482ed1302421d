use alloc::vec::Vec;

use crate::{MapError, TreeMap};

/// The general map contract, with nullable keys and fallible operations.
///
/// Code written against `OrderedMap` may receive keys that are absent; every
/// keyed operation rejects those with [`MapError::InvalidArgument`].
/// Implementations may also refuse operations they do not provide with
/// [`MapError::Unsupported`].
///
/// # Examples
///
/// ```
/// use bst_map::{MapError, OrderedMap, TreeMap};
///
/// fn load<M: OrderedMap<String, u32>>(map: &mut M, raw: &[(Option<&str>, u32)]) -> Result<(), MapError> {
///     for &(key, value) in raw {
///         map.put(key.map(String::from), value)?;
///     }
///     Ok(())
/// }
///
/// let mut map = TreeMap::new();
/// assert_eq!(load(&mut map, &[(Some("a"), 1), (None, 2)]), Err(MapError::InvalidArgument));
/// assert_eq!(OrderedMap::size(&map), 1);
/// ```
pub trait OrderedMap<K, V> {
    /// Returns the number of entries.
    fn size(&self) -> usize;

    /// Returns `true` if there are no entries.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Discards every entry.
    fn clear(&mut self);

    /// Returns whether `key` is present.
    ///
    /// # Errors
    ///
    /// [`MapError::InvalidArgument`] if `key` is `None`.
    fn contains_key(&self, key: Option<&K>) -> Result<bool, MapError>;

    /// Returns whether any entry holds a value equal to `value`.
    fn contains_value(&self, value: &V) -> bool;

    /// Returns the value stored for `key`, or `Ok(None)` if there is none.
    ///
    /// # Errors
    ///
    /// [`MapError::InvalidArgument`] if `key` is `None`.
    fn get(&self, key: Option<&K>) -> Result<Option<&V>, MapError>;

    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// # Errors
    ///
    /// [`MapError::InvalidArgument`] if `key` is `None`; the map is unchanged.
    fn put(&mut self, key: Option<K>, value: V) -> Result<Option<V>, MapError>;

    /// Calls [`put`](Self::put) for each pair of `source` in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing pair and returns its error. Pairs before it
    /// stay applied.
    fn put_all<I>(&mut self, source: I) -> Result<(), MapError>
    where
        I: IntoIterator<Item = (Option<K>, V)>,
    {
        for (key, value) in source {
            self.put(key, value)?;
        }
        Ok(())
    }

    /// Removes `key`, returning its value.
    ///
    /// # Errors
    ///
    /// Implementation defined; see the implementor.
    fn remove(&mut self, key: Option<&K>) -> Result<Option<V>, MapError>;

    /// Returns every key in ascending order.
    fn key_set(&self) -> Vec<&K>;

    /// Returns the distinct values, each once, compared with `PartialEq`.
    fn values(&self) -> Vec<&V>;

    /// Returns every entry in key order.
    ///
    /// # Errors
    ///
    /// Implementation defined; see the implementor.
    fn entry_set(&self) -> Result<Vec<(&K, &V)>, MapError>;
}

impl<K: Ord, V: PartialEq> OrderedMap<K, V> for TreeMap<K, V> {
    fn size(&self) -> usize {
        self.len()
    }

    fn clear(&mut self) {
        TreeMap::clear(self);
    }

    fn contains_key(&self, key: Option<&K>) -> Result<bool, MapError> {
        let key = key.ok_or(MapError::InvalidArgument)?;
        Ok(TreeMap::contains_key(self, key))
    }

    fn contains_value(&self, value: &V) -> bool {
        TreeMap::contains_value(self, value)
    }

    fn get(&self, key: Option<&K>) -> Result<Option<&V>, MapError> {
        let key = key.ok_or(MapError::InvalidArgument)?;
        Ok(TreeMap::get(self, key))
    }

    fn put(&mut self, key: Option<K>, value: V) -> Result<Option<V>, MapError> {
        let key = key.ok_or(MapError::InvalidArgument)?;
        Ok(self.insert(key, value))
    }

    /// Always fails with [`MapError::Unsupported`], whether or not `key` is present.
    fn remove(&mut self, key: Option<&K>) -> Result<Option<V>, MapError> {
        match key {
            Some(key) => TreeMap::remove(self, key),
            None => Err(MapError::Unsupported { operation: "remove" }),
        }
    }

    fn key_set(&self) -> Vec<&K> {
        TreeMap::key_set(self)
    }

    fn values(&self) -> Vec<&V> {
        self.distinct_values()
    }

    /// Always fails with [`MapError::Unsupported`].
    fn entry_set(&self) -> Result<Vec<(&K, &V)>, MapError> {
        TreeMap::entry_set(self).map(Iterator::collect)
    }
}
