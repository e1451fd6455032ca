use super::AvlTreeMap;
use crate::raw::RawAvlTree;

impl<K, V> AvlTreeMap<K, V> {
    /// Creates an empty map with node storage for at least `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<i32, i32> = AvlTreeMap::with_capacity(10);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 10);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AvlTreeMap {
            raw: RawAvlTree::with_capacity(capacity),
        }
    }

    /// Returns how many entries the map can hold before its node storage grows.
    ///
    /// Slots vacated by removals are reused first, so the capacity tracks the
    /// peak length rather than the number of insertions.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::with_capacity(4);
    /// map.set(1, "a");
    /// assert!(map.capacity() >= 4);
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
