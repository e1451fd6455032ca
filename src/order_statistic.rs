/// A zero-based rank into the sorted order of a map or set.
///
/// Indexing with a `Rank` is the panicking counterpart of `loc`, the same
/// way `slice[i]` relates to `slice.get(i)`.
///
/// # Examples
///
/// ```
/// use avl_ost::{AvlTreeMap, Rank};
///
/// let mut map = AvlTreeMap::new();
/// map.set("a", 10);
/// map.set("b", 20);
///
/// assert_eq!(map[Rank(0)], 10);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
