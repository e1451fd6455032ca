use super::AvlTreeSet;
use crate::AvlTreeMap;

impl<T> AvlTreeSet<T> {
    /// Creates an empty set with node storage for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set: AvlTreeSet<i32> = AvlTreeSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AvlTreeSet {
            map: AvlTreeMap::with_capacity(capacity),
        }
    }

    /// Returns how many elements the set can hold before its node storage grows.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }
}
