use alloc::vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use crate::raw::{RawAvlTree, RawIter};
use crate::{Error, Result};

mod capacity;
mod order_statistic;

pub use crate::Rank;

/// An ordered map based on an [AVL tree] augmented with subtree sizes.
///
/// Given a key type with a [total order], an ordered map stores its entries in key order.
/// That means that keys must be of a type that implements the [`Ord`] trait,
/// such that two keys can always be compared to determine their [`Ordering`].
///
/// Iterators obtained from functions such as [`AvlTreeMap::iter`], [`AvlTreeMap::into_iter`],
/// [`AvlTreeMap::values`], or [`AvlTreeMap::keys`] produce their items in key order. Each
/// call starts a fresh, independent walk; the borrow checker keeps the map from being
/// mutated while one is alive.
///
/// Writes come in one flavour only: [`set`](AvlTreeMap::set) inserts a new key or
/// overwrites the value of an existing one. Strict operations ([`require`], [`delete`],
/// [`min`], [`max`], [`loc`]) report failure through [`Error`]; the lenient ones
/// ([`get`], [`get_or`], [`at_most`], [`at_least`]) return an `Option` or a default.
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key, as determined by the [`Ord`] trait, changes while it is in the map. The
/// behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `AvlTreeMap` that observed the logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use avl_ost::{AvlTreeMap, Error};
///
/// let mut inventory = AvlTreeMap::new();
/// inventory.set("apples", 3);
/// inventory.set("pears", 0);
/// inventory.set("figs", 12);
///
/// // `set` on an existing key overwrites in place and hands back the old value.
/// assert_eq!(inventory.set("pears", 7), Some(0));
/// assert_eq!(inventory.len(), 3);
///
/// assert_eq!(inventory.get_or(&"plums", &0), &0);
/// assert_eq!(inventory.require(&"plums"), Err(Error::KeyNotFound));
///
/// // Removing a missing key is an error for maps.
/// assert_eq!(inventory.delete(&"figs"), Ok(12));
/// assert_eq!(inventory.delete(&"figs"), Err(Error::KeyNotFound));
///
/// for (fruit, count) in &inventory {
///     println!("{fruit}: {count}");
/// }
/// ```
///
/// An `AvlTreeMap` can be built from any sequence of pairs; when a key repeats, the
/// last pair wins:
///
/// ```
/// use avl_ost::AvlTreeMap;
///
/// let map = AvlTreeMap::from([("b", 1), ("a", 3), ("c", 2), ("b", 9)]);
/// assert_eq!(map.iter().collect::<Vec<_>>(), [(&"a", &3), (&"b", &9), (&"c", &2)]);
/// ```
///
/// [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
/// [`Ordering`]: core::cmp::Ordering
/// [`require`]: AvlTreeMap::require
/// [`delete`]: AvlTreeMap::delete
/// [`min`]: AvlTreeMap::min
/// [`max`]: AvlTreeMap::max
/// [`loc`]: AvlTreeMap::loc
/// [`get`]: AvlTreeMap::get
/// [`get_or`]: AvlTreeMap::get_or
/// [`at_most`]: AvlTreeMap::at_most
/// [`at_least`]: AvlTreeMap::at_least
pub struct AvlTreeMap<K, V> {
    raw: RawAvlTree<K, V>,
}

/// An iterator over the entries of an `AvlTreeMap`, in ascending key order.
///
/// This `struct` is created by the [`iter`] method on [`AvlTreeMap`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use avl_ost::AvlTreeMap;
///
/// let map = AvlTreeMap::from([(1, "a"), (2, "b")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: AvlTreeMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: RawIter<'a, K, V>,
}

/// An iterator over the keys of an `AvlTreeMap`.
///
/// This `struct` is created by the [`keys`] method on [`AvlTreeMap`].
///
/// [`keys`]: AvlTreeMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: RawIter<'a, K, V>,
}

/// An iterator over the values of an `AvlTreeMap`, ordered by key.
///
/// This `struct` is created by the [`values`] method on [`AvlTreeMap`].
///
/// [`values`]: AvlTreeMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: RawIter<'a, K, V>,
}

/// An owning iterator over the entries of an `AvlTreeMap`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`AvlTreeMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: vec::IntoIter<(K, V)>,
}

impl<K, V> AvlTreeMap<K, V> {
    /// Makes a new, empty `AvlTreeMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.set(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        AvlTreeMap { raw: RawAvlTree::new() }
    }

    /// Returns the number of entries in the map. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let mut a = AvlTreeMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.set(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the height of the underlying tree (0 when empty). O(1).
    ///
    /// The AVL balance rule keeps this below `1.4405 * log2(len + 2) - 0.3277`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<_, _> = (0..7).map(|k| (k, ())).collect();
    /// assert_eq!(map.height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        usize::from(self.raw.height())
    }

    /// Removes every entry. Node storage keeps its capacity for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let mut a = AvlTreeMap::from([(1, "a")]);
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the smallest key and its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::{AvlTreeMap, Error};
    ///
    /// let mut map = AvlTreeMap::new();
    /// assert_eq!(map.min(), Err(Error::EmptyTree));
    /// map.set(2, "b");
    /// map.set(1, "a");
    /// assert_eq!(map.min(), Ok((&1, &"a")));
    /// ```
    pub fn min(&self) -> Result<(&K, &V)> {
        self.raw.first().ok_or(Error::EmptyTree)
    }

    /// Returns the largest key and its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.max(), Ok((&2, &"b")));
    /// ```
    pub fn max(&self) -> Result<(&K, &V)> {
        self.raw.last().ok_or(Error::EmptyTree)
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(3, "c"), (2, "b"), (1, "a")]);
    /// let keys: Vec<_> = map.iter().map(|(key, _)| *key).collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { inner: self.raw.iter() }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.raw.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.values().copied().collect::<Vec<_>>(), ["a", "b"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.raw.iter() }
    }
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Returns a reference to the value corresponding to the key, or `None`.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(1, "a")]);
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key).map(|(_, value)| value)
    }

    /// Returns the value for `key`, or `default` when the key is absent. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([("x", 1)]);
    /// assert_eq!(map.get_or(&"x", &0), &1);
    /// assert_eq!(map.get_or(&"y", &0), &0);
    /// ```
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.get(key).unwrap_or(default)
    }

    /// Returns the stored key and value corresponding to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(1, "a")]);
    /// assert_eq!(map.get_key_value(&1), Some((&1, &"a")));
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::from([(1, "a")]);
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Strict lookup: returns the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::{AvlTreeMap, Error};
    ///
    /// let map = AvlTreeMap::from([(1, "a")]);
    /// assert_eq!(map.require(&1), Ok(&"a"));
    /// assert_eq!(map.require(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn require<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(1, "a")]);
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains_key(key)
    }

    /// Upsert: inserts `key` with `value`, or overwrites the value of an existing key.
    ///
    /// Returns the previous value if the key was present. Overwriting leaves the
    /// stored key, the length and every other entry untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// assert_eq!(map.set(37, "a"), None);
    /// assert_eq!(map.set(37, "b"), Some("a"));
    /// assert_eq!(map[&37], "b");
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Removes `key` and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent; the map is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::{AvlTreeMap, Error};
    ///
    /// let mut map = AvlTreeMap::from([(1, "a")]);
    /// assert_eq!(map.delete(&1), Ok("a"));
    /// assert_eq!(map.delete(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key).map(|(_, value)| value).ok_or(Error::KeyNotFound)
    }

    /// Sets every pair from `entries`, in order; the last pair for a key wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::from([(1, "a"), (2, "b")]);
    /// map.update([(2, "x"), (3, "c"), (2, "y")]);
    /// assert_eq!(map.values().copied().collect::<Vec<_>>(), ["a", "y", "c"]);
    /// ```
    pub fn update<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.raw.bulk_load(entries);
    }
}

impl<K: Hash, V: Hash> Hash for AvlTreeMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for entry in self {
            entry.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AvlTreeMap<K, V> {
    fn eq(&self, other: &AvlTreeMap<K, V>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for AvlTreeMap<K, V> {}

impl<K: Clone, V: Clone> Clone for AvlTreeMap<K, V> {
    fn clone(&self) -> Self {
        AvlTreeMap { raw: self.raw.clone() }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for AvlTreeMap<K, V> {
    /// Creates an empty `AvlTreeMap`.
    fn default() -> AvlTreeMap<K, V> {
        AvlTreeMap::new()
    }
}

impl<K, Q, V> Index<&Q> for AvlTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `AvlTreeMap`.
    #[inline]
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> AvlTreeMap<K, V> {
        let mut map = AvlTreeMap::new();
        map.update(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlTreeMap<K, V> {
    #[inline]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.update(iter);
    }
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for AvlTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        self.update(iter.into_iter().map(|(&key, &value)| (key, value)));
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for AvlTreeMap<K, V> {
    /// Converts a `[(K, V); N]` into an `AvlTreeMap<K, V>`; repeated keys resolve
    /// to the last value given.
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map1 = AvlTreeMap::from([(1, 2), (3, 4)]);
    /// let map2: AvlTreeMap<_, _> = [(1, 2), (3, 4)].into();
    /// assert_eq!(map1, map2);
    /// ```
    fn from(arr: [(K, V); N]) -> Self {
        AvlTreeMap::from_iter(arr)
    }
}

impl<K, V> IntoIterator for AvlTreeMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let entries: Vec<_> = map.into_iter().collect();
    /// assert_eq!(entries, [(1, "a"), (2, "b"), (3, "c")]);
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a AvlTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<(&'a K, &'a V)> {
        self.next_back()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
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

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<&'a K> {
        self.next_back()
    }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a K> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
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

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<&'a V> {
        self.next_back()
    }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a V> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
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

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<K, V> Default for IntoIter<K, V> {
    /// Creates an empty `avl_tree_map::IntoIter`.
    ///
    /// ```
    /// # use avl_ost::avl_tree_map;
    /// let iter: avl_tree_map::IntoIter<u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: vec::IntoIter::default(),
        }
    }
}
