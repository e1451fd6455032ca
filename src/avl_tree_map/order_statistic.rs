use core::borrow::Borrow;
use core::cmp::Ordering;
use core::ops::{Index, IndexMut};

use super::AvlTreeMap;
use crate::{Error, Rank, Result};

impl<K, V> AvlTreeMap<K, V> {
    /// Returns the entry at position `index` in sorted order (select).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < self.len()`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::{AvlTreeMap, Error};
    ///
    /// let map = AvlTreeMap::from([("b", 2), ("a", 1), ("c", 3)]);
    /// assert_eq!(map.loc(1), Ok((&"b", &2)));
    /// assert_eq!(map.loc(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn loc(&self, index: usize) -> Result<(&K, &V)> {
        self.raw.get_by_rank(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Returns the key-value pair at position `rank` in sorted order, or `None`
    /// if `rank` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([("a", 10), ("c", 30), ("b", 20)]);
    /// assert_eq!(map.get_by_rank(1), Some((&"b", &20)));
    /// assert!(map.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw.get_by_rank(rank)
    }

    /// Returns the key and a mutable reference to the value at position `rank`
    /// in sorted order.
    ///
    /// The key is returned as a shared reference because mutating it would
    /// violate the map's ordering invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::from([(10, "a"), (5, "b")]);
    /// if let Some((key, value)) = map.get_by_rank_mut(0) {
    ///     assert_eq!(*key, 5);
    ///     *value = "updated";
    /// }
    /// assert_eq!(map.get(&5), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        self.raw.get_by_rank_mut(rank)
    }

    /// Returns the greatest key that `probe` does not place above the target.
    ///
    /// `probe(key)` must report how `key` compares to the target, consistently
    /// with the key order. This allows targets of another type:
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<i32, &str> = (0..100).map(|k| (k, "")).collect();
    /// let below = map.at_most_by(|key| f64::from(*key).total_cmp(&23.3));
    /// assert_eq!(below, Some(&23));
    /// ```
    pub fn at_most_by<F>(&self, probe: F) -> Option<&K>
    where
        F: FnMut(&K) -> Ordering,
    {
        self.raw.floor_by(probe).map(|(key, _)| key)
    }

    /// Returns the least key that `probe` does not place below the target.
    ///
    /// See [`at_most_by`](AvlTreeMap::at_most_by) for the contract on `probe`.
    pub fn at_least_by<F>(&self, probe: F) -> Option<&K>
    where
        F: FnMut(&K) -> Ordering,
    {
        self.raw.ceiling_by(probe).map(|(key, _)| key)
    }
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Returns the zero-based rank of `key` in sorted order, or `None` if the
    /// key is not present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(10, "a"), (20, "b")]);
    /// assert_eq!(map.rank_of(&10), Some(0));
    /// assert_eq!(map.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(key)
    }

    /// Floor query: the greatest key `<= target`, or `None` if every key is greater.
    ///
    /// Only the key is returned; look the value up separately if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(10, "a"), (20, "b")]);
    /// assert_eq!(map.at_most(&15), Some(&10));
    /// assert_eq!(map.at_most(&20), Some(&20));
    /// assert_eq!(map.at_most(&5), None);
    /// ```
    pub fn at_most<Q>(&self, target: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.at_most_by(|key| key.borrow().cmp(target))
    }

    /// Ceiling query: the least key `>= target`, or `None` if every key is smaller.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(10, "a"), (20, "b")]);
    /// assert_eq!(map.at_least(&15), Some(&20));
    /// assert_eq!(map.at_least(&25), None);
    /// ```
    pub fn at_least<Q>(&self, target: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.at_least_by(|key| key.borrow().cmp(target))
    }
}

/// Indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use avl_ost::{AvlTreeMap, Rank};
///
/// let map = AvlTreeMap::from([("a", 1), ("b", 2)]);
/// assert_eq!(map[Rank(0)], 1);
/// ```
impl<K, V> Index<Rank> for AvlTreeMap<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).map(|(_, v)| v).expect("index out of bounds")
    }
}

/// Mutably indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use avl_ost::{AvlTreeMap, Rank};
///
/// let mut map = AvlTreeMap::from([("a", 1), ("b", 2)]);
/// map[Rank(1)] = 5;
/// assert_eq!(map.get(&"b"), Some(&5));
/// ```
impl<K, V> IndexMut<Rank> for AvlTreeMap<K, V> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.get_by_rank_mut(rank.0).map(|(_, v)| v).expect("index out of bounds")
    }
}
