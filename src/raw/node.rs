use core::mem;

use super::handle::Handle;

/// The child link a descent step followed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// AVL node: one entry plus the augmentation needed for balance and rank queries.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    left: Option<Handle>,
    right: Option<Handle>,
    // Height of the subtree rooted here; a leaf has height 1, an absent child 0.
    height: u8,
    // Number of entries in the subtree rooted here.
    size: usize,
}

impl<K, V> Node<K, V> {
    /// Creates a detached leaf holding one entry.
    pub(crate) const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
            size: 1,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) const fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Borrows the key and the value at once; the key stays read-only.
    #[inline]
    pub(crate) fn entry_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) const fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    pub(crate) const fn size(&self) -> usize {
        self.size
    }

    /// Stores freshly recomputed subtree metrics.
    pub(crate) fn set_metrics(&mut self, height: u8, size: usize) {
        self.height = height;
        self.size = size;
    }

    /// Swaps in a donor entry (two-child removal) and hands back the old one.
    pub(crate) fn replace_entry(&mut self, key: K, value: V) -> (K, V) {
        (mem::replace(&mut self.key, key), mem::replace(&mut self.value, value))
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}
