/// Failures reported by [`AvlTreeMap`](crate::AvlTreeMap) and
/// [`AvlTreeSet`](crate::AvlTreeSet).
///
/// Every variant is a pure function of the collection's current contents and
/// the arguments of the failing call; nothing is modified when one is returned.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Error {
    /// `min` or `max` was asked of an empty collection.
    #[error("tree is empty")]
    EmptyTree,
    /// A strict map lookup or deletion named a key that is not present.
    #[error("key not found")]
    KeyNotFound,
    /// A rank query fell outside `0..len`.
    #[error("index {index} out of range for tree of length {len}")]
    IndexOutOfRange {
        /// The requested rank.
        index: usize,
        /// The collection's length at the time of the call.
        len: usize,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
