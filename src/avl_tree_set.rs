use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use crate::avl_tree_map::{self, AvlTreeMap, Keys};
use crate::Result;

mod capacity;
mod order_statistic;

pub use crate::Rank;

/// An ordered set based on an [AVL tree] augmented with subtree sizes.
///
/// See [`AvlTreeMap`]'s documentation for a detailed discussion of this collection's
/// performance benefits and drawbacks.
///
/// Unlike the map, the set has no values and never overwrites: [`add`](AvlTreeSet::add)
/// on a present element keeps the stored one and reports `false`, and
/// [`remove`](AvlTreeSet::remove) on an absent element is not an error.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering relative
/// to any other item, as determined by the [`Ord`] trait, changes while it is in the set.
///
/// # Examples
///
/// ```
/// use avl_ost::AvlTreeSet;
///
/// let mut books = AvlTreeSet::new();
///
/// books.add("A Dance With Dragons");
/// books.add("To Kill a Mockingbird");
/// books.add("The Odyssey");
/// books.add("The Great Gatsby");
///
/// if !books.contains("The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.", books.len());
/// }
///
/// // Removing a missing element is fine.
/// books.remove("The Winds of Winter");
/// books.remove("The Odyssey");
///
/// // Iterate over everything, in order.
/// for book in &books {
///     println!("{book}");
/// }
/// assert_eq!(books.loc(0), Ok(&"A Dance With Dragons"));
/// ```
///
/// An `AvlTreeSet` with a known list of items can be initialized from an array:
///
/// ```
/// use avl_ost::AvlTreeSet;
///
/// let set = AvlTreeSet::from([1, 2, 3]);
/// ```
///
/// [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree
pub struct AvlTreeSet<T> {
    map: AvlTreeMap<T, ()>,
}

/// An iterator over the items of an `AvlTreeSet`, in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`AvlTreeSet`].
///
/// [`iter`]: AvlTreeSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: Keys<'a, T, ()>,
}

/// An owning iterator over the items of an `AvlTreeSet` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`AvlTreeSet`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: AvlTreeSet#method.into_iter
pub struct IntoIter<T> {
    inner: avl_tree_map::IntoIter<T, ()>,
}

impl<T> AvlTreeSet<T> {
    /// Makes a new, empty `AvlTreeSet`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let mut set: AvlTreeSet<i32> = AvlTreeSet::new();
    /// ```
    #[must_use]
    pub const fn new() -> AvlTreeSet<T> {
        AvlTreeSet { map: AvlTreeMap::new() }
    }

    /// Returns the number of elements in the set. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let mut v = AvlTreeSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.add(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the height of the underlying tree (0 when empty). O(1).
    #[must_use]
    pub fn height(&self) -> usize {
        self.map.height()
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let mut v = AvlTreeSet::from([1]);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`](crate::Error::EmptyTree) if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::{AvlTreeSet, Error};
    ///
    /// let mut set: AvlTreeSet<i32> = AvlTreeSet::new();
    /// assert_eq!(set.min(), Err(Error::EmptyTree));
    /// set.extend([3, 1, 2]);
    /// assert_eq!(set.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        self.map.min().map(|(item, _)| item)
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`](crate::Error::EmptyTree) if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set = AvlTreeSet::from([3, 1, 2]);
    /// assert_eq!(set.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        self.map.max().map(|(item, _)| item)
    }

    /// Gets an iterator that visits the elements in the `AvlTreeSet` in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set = AvlTreeSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.map.keys() }
    }
}

impl<T: Ord> AvlTreeSet<T> {
    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. A value that is already
    /// present is left as it was; the set is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let mut set = AvlTreeSet::new();
    /// assert!(set.add(2));
    /// assert!(!set.add(2));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        self.map.set(value, ()).is_none()
    }

    /// Removes a value from the set, returning whether it was present.
    ///
    /// Removing an absent value is not an error; the set is simply unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let mut set = AvlTreeSet::from([1, 2, 3]);
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&99));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.delete(value).is_ok()
    }

    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set = AvlTreeSet::from([1, 2, 3]);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&4));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.contains_key(value)
    }

    /// Returns a reference to the stored element equal to the value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set = AvlTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.get_key_value(value).map(|(item, _)| item)
    }
}

impl<T: Hash> Hash for AvlTreeSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.hash(state);
        }
    }
}

impl<T: PartialEq> PartialEq for AvlTreeSet<T> {
    fn eq(&self, other: &AvlTreeSet<T>) -> bool {
        self.map.eq(&other.map)
    }
}

impl<T: Eq> Eq for AvlTreeSet<T> {}

impl<T: Clone> Clone for AvlTreeSet<T> {
    fn clone(&self) -> Self {
        AvlTreeSet { map: self.map.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for AvlTreeSet<T> {
    /// Creates an empty `AvlTreeSet`.
    fn default() -> AvlTreeSet<T> {
        AvlTreeSet::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> AvlTreeSet<T> {
        let mut set = AvlTreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for AvlTreeSet<T> {
    /// Adds every element in order; elements already present are left untouched.
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.map.update(iter.into_iter().map(|item| (item, ())));
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for AvlTreeSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for AvlTreeSet<T> {
    /// Converts a `[T; N]` into an `AvlTreeSet<T>`.
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set1 = AvlTreeSet::from([1, 2, 3, 4]);
    /// let set2: AvlTreeSet<_> = [1, 2, 3, 4].into();
    /// assert_eq!(set1, set2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        AvlTreeSet::from_iter(arr)
    }
}

impl<T> IntoIterator for AvlTreeSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `AvlTreeSet`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set = AvlTreeSet::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.map.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("inner", &self.inner).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|(item, _)| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(|(item, _)| item)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("inner", &self.inner).finish()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `avl_tree_set::IntoIter`.
    ///
    /// ```
    /// # use avl_ost::avl_tree_set;
    /// let iter: avl_tree_set::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: avl_tree_map::IntoIter::default(),
        }
    }
}
