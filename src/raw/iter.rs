use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;
use super::raw_avl_tree::MAX_DEPTH;

type Spine = SmallVec<[Handle; MAX_DEPTH]>;

/// Lazy in-order walk over a tree, from both ends.
///
/// Each end keeps its own stack of pending ancestors. `remaining` stops the
/// two walks as soon as they have yielded every entry between them, so they
/// never cross.
pub(crate) struct RawIter<'a, K, V> {
    nodes: &'a Arena<Node<K, V>>,
    front: Spine,
    back: Spine,
    remaining: usize,
}

impl<'a, K, V> RawIter<'a, K, V> {
    pub(crate) fn new(nodes: &'a Arena<Node<K, V>>, root: Option<Handle>, len: usize) -> Self {
        let mut iter = Self {
            nodes,
            front: SmallVec::new(),
            back: SmallVec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter.push_right_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut cursor: Option<Handle>) {
        while let Some(handle) = cursor {
            self.front.push(handle);
            cursor = self.nodes.get(handle).left();
        }
    }

    fn push_right_spine(&mut self, mut cursor: Option<Handle>) {
        while let Some(handle) = cursor {
            self.back.push(handle);
            cursor = self.nodes.get(handle).right();
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, K, V> Iterator for RawIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front.pop()?;
        let node = self.nodes.get(handle);
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for RawIter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back.pop()?;
        let node = self.nodes.get(handle);
        self.push_right_spine(node.left());
        self.remaining -= 1;
        Some((node.key(), node.value()))
    }
}

impl<K, V> Clone for RawIter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}
