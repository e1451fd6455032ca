use core::borrow::Borrow;
use core::cmp::Ordering;
use core::ops::Index;

use super::AvlTreeSet;
use crate::{Rank, Result};

impl<T> AvlTreeSet<T> {
    /// Returns the element at position `index` in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) unless
    /// `index < self.len()`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::{AvlTreeSet, Error};
    ///
    /// let set: AvlTreeSet<_> = (0..100).collect();
    /// assert_eq!(set.loc(42), Ok(&42));
    /// assert_eq!(set.loc(101), Err(Error::IndexOutOfRange { index: 101, len: 100 }));
    /// ```
    pub fn loc(&self, index: usize) -> Result<&T> {
        self.map.loc(index).map(|(item, _)| item)
    }

    /// Returns the element at position `rank` in sorted order, or `None` if
    /// `rank` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set = AvlTreeSet::from([30, 10, 20]);
    /// assert_eq!(set.get_by_rank(0), Some(&10));
    /// assert_eq!(set.get_by_rank(3), None);
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.map.get_by_rank(rank).map(|(item, _)| item)
    }

    /// Returns the greatest element that `probe` does not place above the target.
    ///
    /// `probe(item)` reports how `item` compares to the target:
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set: AvlTreeSet<i32> = (0..100).collect();
    /// let probe = |item: &i32| f64::from(*item).total_cmp(&23.3);
    /// assert_eq!(set.at_most_by(probe), Some(&23));
    /// assert_eq!(set.at_least_by(probe), Some(&24));
    /// ```
    pub fn at_most_by<F>(&self, probe: F) -> Option<&T>
    where
        F: FnMut(&T) -> Ordering,
    {
        self.map.at_most_by(probe)
    }

    /// Returns the least element that `probe` does not place below the target.
    pub fn at_least_by<F>(&self, probe: F) -> Option<&T>
    where
        F: FnMut(&T) -> Ordering,
    {
        self.map.at_least_by(probe)
    }
}

impl<T: Ord> AvlTreeSet<T> {
    /// Returns the zero-based rank of `value`, or `None` if it is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set = AvlTreeSet::from([10, 20, 30]);
    /// assert_eq!(set.rank_of(&30), Some(2));
    /// assert_eq!(set.rank_of(&25), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.rank_of(value)
    }

    /// Floor query: the greatest element `<= target`, or `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set = AvlTreeSet::from([10, 20, 30]);
    /// assert_eq!(set.at_most(&25), Some(&20));
    /// assert_eq!(set.at_most(&9), None);
    /// ```
    pub fn at_most<Q>(&self, target: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.at_most(target)
    }

    /// Ceiling query: the least element `>= target`, or `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set = AvlTreeSet::from([10, 20, 30]);
    /// assert_eq!(set.at_least(&25), Some(&30));
    /// assert_eq!(set.at_least(&31), None);
    /// ```
    pub fn at_least<Q>(&self, target: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.at_least(target)
    }
}

/// Indexes into the set by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use avl_ost::{AvlTreeSet, Rank};
///
/// let set = AvlTreeSet::from(["b", "a"]);
/// assert_eq!(set[Rank(0)], "a");
/// ```
impl<T> Index<Rank> for AvlTreeSet<T> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("index out of bounds")
    }
}
