use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::{Ordering, max};
use core::mem;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::arena::Arena;
use super::handle::Handle;
use super::iter::RawIter;
use super::node::{Node, Side};

/// Inline capacity of descent paths and iterator stacks.
///
/// An AVL tree of `n` nodes is at most `1.4405 * log2(n + 2)` high, which
/// stays below 48 for every `n` a `Handle` can address.
pub(crate) const MAX_DEPTH: usize = 48;

/// Ancestors visited on the way down, with the side taken at each.
type Path = SmallVec<[(Handle, Side); MAX_DEPTH]>;

/// The AVL engine backing `AvlTreeMap` and (with `V = ()`) `AvlTreeSet`.
///
/// Every node caches its subtree height and subtree size. Mutations record
/// their descent path and retrace it bottom-up, recomputing both caches and
/// rotating wherever the children's heights differ by two.
#[derive(Clone)]
pub(crate) struct RawAvlTree<K, V> {
    nodes: Arena<Node<K, V>>,
    root: Option<Handle>,
    len: usize,
}

impl<K, V> RawAvlTree<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Height of the whole tree; 0 when empty.
    pub(crate) fn height(&self) -> u8 {
        self.height_of(self.root)
    }

    pub(crate) fn clear(&mut self) {
        debug!(dropped = self.len, "clearing tree");
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    pub(crate) fn iter(&self) -> RawIter<'_, K, V> {
        RawIter::new(&self.nodes, self.root, self.len)
    }

    /// Moves every entry out in ascending key order, leaving the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut handles = Vec::with_capacity(self.len);
        let mut pending: SmallVec<[Handle; MAX_DEPTH]> = SmallVec::new();
        let mut cursor = self.root;
        while cursor.is_some() || !pending.is_empty() {
            while let Some(handle) = cursor {
                pending.push(handle);
                cursor = self.nodes.get(handle).left();
            }
            if let Some(handle) = pending.pop() {
                handles.push(handle);
                cursor = self.nodes.get(handle).right();
            }
        }

        let entries: Vec<(K, V)> = handles.into_iter().map(|handle| self.nodes.take(handle).into_entry()).collect();
        self.nodes.clear();
        self.root = None;
        self.len = 0;
        entries
    }

    pub(crate) fn first(&self) -> Option<(&K, &V)> {
        self.extreme(Side::Left).map(|handle| self.entry(handle))
    }

    pub(crate) fn last(&self) -> Option<(&K, &V)> {
        self.extreme(Side::Right).map(|handle| self.entry(handle))
    }

    /// Returns the entry at zero-based position `rank` in key order.
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.handle_by_rank(rank).map(|handle| self.entry(handle))
    }

    pub(crate) fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        let handle = self.handle_by_rank(rank)?;
        Some(self.nodes.get_mut(handle).entry_mut())
    }

    /// Greatest entry whose key is `<=` the target.
    ///
    /// `probe` orders a stored key against the target, so the target need not
    /// share the key type.
    pub(crate) fn floor_by<F>(&self, probe: F) -> Option<(&K, &V)>
    where
        F: FnMut(&K) -> Ordering,
    {
        self.bound_by(probe, Side::Right).map(|handle| self.entry(handle))
    }

    /// Least entry whose key is `>=` the target.
    pub(crate) fn ceiling_by<F>(&self, probe: F) -> Option<(&K, &V)>
    where
        F: FnMut(&K) -> Ordering,
    {
        self.bound_by(probe, Side::Left).map(|handle| self.entry(handle))
    }

    // Floor walks right past keys below the target, ceiling walks left past
    // keys above it; each remembers the last key it stepped past.
    fn bound_by<F>(&self, mut probe: F, toward: Side) -> Option<Handle>
    where
        F: FnMut(&K) -> Ordering,
    {
        let behind = match toward {
            Side::Right => Ordering::Less,
            Side::Left => Ordering::Greater,
        };
        let mut best = None;
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.nodes.get(handle);
            match probe(node.key()) {
                Ordering::Equal => return Some(handle),
                ordering if ordering == behind => {
                    best = Some(handle);
                    cursor = node.child(toward);
                }
                _ => cursor = node.child(toward.opposite()),
            }
        }
        best
    }

    fn entry(&self, handle: Handle) -> (&K, &V) {
        let node = self.nodes.get(handle);
        (node.key(), node.value())
    }

    fn extreme(&self, side: Side) -> Option<Handle> {
        let mut handle = self.root?;
        while let Some(next) = self.nodes.get(handle).child(side) {
            handle = next;
        }
        Some(handle)
    }

    fn handle_by_rank(&self, mut rank: usize) -> Option<Handle> {
        if rank >= self.len {
            return None;
        }
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.nodes.get(handle);
            let left_size = self.size_of(node.left());
            match rank.cmp(&left_size) {
                Ordering::Less => cursor = node.left(),
                Ordering::Equal => return Some(handle),
                Ordering::Greater => {
                    rank -= left_size + 1;
                    cursor = node.right();
                }
            }
        }
        None
    }

    fn height_of(&self, handle: Option<Handle>) -> u8 {
        handle.map_or(0, |handle| self.nodes.get(handle).height())
    }

    fn size_of(&self, handle: Option<Handle>) -> usize {
        handle.map_or(0, |handle| self.nodes.get(handle).size())
    }

    fn balance_factor(&self, handle: Handle) -> i16 {
        let node = self.nodes.get(handle);
        i16::from(self.height_of(node.left())) - i16::from(self.height_of(node.right()))
    }

    /// Recomputes the cached height and size of `handle` from its children.
    fn update(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let (left, right) = (node.left(), node.right());
        let height = 1 + max(self.height_of(left), self.height_of(right));
        let size = 1 + self.size_of(left) + self.size_of(right);
        self.nodes.get_mut(handle).set_metrics(height, size);
    }

    /// Rotates the subtree at `handle` toward `side` and returns the new subtree root.
    ///
    /// ```text
    ///       y                               x
    ///      / \      rotate Right           / \
    ///     x   T3    - - - - - - - >      T1   y
    ///    / \        < - - - - - - -          / \
    ///   T1  T2      rotate Left            T2  T3
    /// ```
    fn rotate(&mut self, handle: Handle, side: Side) -> Handle {
        let pivot = self
            .nodes
            .get(handle)
            .child(side.opposite())
            .expect("`RawAvlTree::rotate()` - rotation pivot is missing!");
        let inner = self.nodes.get(pivot).child(side);

        self.nodes.get_mut(handle).set_child(side.opposite(), inner);
        self.nodes.get_mut(pivot).set_child(side, Some(handle));
        self.update(handle);
        self.update(pivot);

        trace!(?side, size = self.nodes.get(pivot).size(), "rotated subtree");
        pivot
    }

    /// Refreshes `handle` and restores the balance invariant at it, returning
    /// the handle now rooting this subtree.
    fn rebalance(&mut self, handle: Handle) -> Handle {
        self.update(handle);
        let balance = self.balance_factor(handle);
        if balance.abs() < 2 {
            return handle;
        }

        // `heavy` is the taller side; a child leaning the other way needs a
        // double rotation.
        let heavy = if balance > 0 { Side::Left } else { Side::Right };
        let child = self
            .nodes
            .get(handle)
            .child(heavy)
            .expect("`RawAvlTree::rebalance()` - heavy side has no child!");
        let child_balance = self.balance_factor(child);
        let leans_away = match heavy {
            Side::Left => child_balance < 0,
            Side::Right => child_balance > 0,
        };
        if leans_away {
            let pivot = self.rotate(child, heavy);
            self.nodes.get_mut(handle).set_child(heavy, Some(pivot));
        }
        self.rotate(handle, heavy.opposite())
    }

    /// Points the last step of `path` (or the root) at `child`.
    fn link(&mut self, path: &[(Handle, Side)], child: Option<Handle>) {
        match path.last() {
            Some(&(parent, side)) => self.nodes.get_mut(parent).set_child(side, child),
            None => self.root = child,
        }
    }

    /// Walks `path` bottom-up, refreshing caches, rebalancing, and relinking
    /// each rebuilt subtree into its parent.
    fn retrace(&mut self, path: &[(Handle, Side)]) {
        for depth in (0..path.len()).rev() {
            let subtree = self.rebalance(path[depth].0);
            self.link(&path[..depth], Some(subtree));
        }
    }
}

impl<K: Ord, V> RawAvlTree<K, V> {
    fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.nodes.get(handle);
            cursor = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(key).map(|handle| self.entry(handle))
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.find(key)?;
        Some(self.nodes.get_mut(handle).value_mut())
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(key).is_some()
    }

    /// Zero-based position of `key` in key order, if present.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut rank = 0;
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.nodes.get(handle);
            match key.cmp(node.key().borrow()) {
                Ordering::Less => cursor = node.left(),
                Ordering::Equal => return Some(rank + self.size_of(node.left())),
                Ordering::Greater => {
                    rank += self.size_of(node.left()) + 1;
                    cursor = node.right();
                }
            }
        }
        None
    }

    /// Inserts an entry, or overwrites the value of an existing key in place.
    ///
    /// Returns the displaced value; `None` means a node was created. An
    /// existing key keeps its stored key and its position in the tree.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut path = Path::new();
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.nodes.get(handle);
            let side = match key.cmp(node.key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    return Some(mem::replace(self.nodes.get_mut(handle).value_mut(), value));
                }
            };
            path.push((handle, side));
            cursor = node.child(side);
        }

        let leaf = self.nodes.alloc(Node::leaf(key, value));
        self.link(&path, Some(leaf));
        self.len += 1;
        self.retrace(&path);
        None
    }

    /// Removes `key` and returns its entry, or `None` (and no change) if absent.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut path = Path::new();
        let mut cursor = self.root;
        let target = loop {
            let handle = cursor?;
            let node = self.nodes.get(handle);
            let side = match key.cmp(node.key().borrow()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => break handle,
            };
            path.push((handle, side));
            cursor = node.child(side);
        };

        let node = self.nodes.get(target);
        let entry = match (node.left(), node.right()) {
            (Some(_), Some(right)) => {
                // The in-order successor has no left child; it donates its
                // entry to `target` and its own node is the one unlinked.
                path.push((target, Side::Right));
                let mut successor = right;
                while let Some(next) = self.nodes.get(successor).left() {
                    path.push((successor, Side::Left));
                    successor = next;
                }
                let donor = self.nodes.take(successor);
                self.link(&path, donor.right());
                let (donor_key, donor_value) = donor.into_entry();
                self.nodes.get_mut(target).replace_entry(donor_key, donor_value)
            }
            (only_child, None) | (None, only_child) => {
                self.link(&path, only_child);
                self.nodes.take(target).into_entry()
            }
        };

        self.len -= 1;
        self.retrace(&path);
        Some(entry)
    }

    /// Inserts every entry in order; later duplicates overwrite earlier ones.
    /// Returns how many keys were new.
    pub(crate) fn bulk_load<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut offered = 0usize;
        let mut created = 0usize;
        for (key, value) in entries {
            offered += 1;
            if self.insert(key, value).is_none() {
                created += 1;
            }
        }
        debug!(offered, created, len = self.len, "bulk load finished");
        created
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;
    use proptest::prelude::*;

    impl<K: Ord + core::fmt::Debug, V> RawAvlTree<K, V> {
        /// Checks every structural invariant and panics with a list of violations.
        pub(crate) fn validate_invariants(&self) {
            let mut errors: Vec<String> = Vec::new();
            let (_, size) = self.validate_node(self.root, None, None, &mut errors);

            if size != self.len {
                errors.push(format!("len mismatch: cached={}, counted={size}", self.len));
            }
            if self.nodes.len() != self.len {
                errors.push(format!("arena holds {} nodes for len {}", self.nodes.len(), self.len));
            }
            assert!(errors.is_empty(), "AVL invariant violations:\n{}", errors.join("\n"));
        }

        // Returns (height, size) of the subtree as actually counted.
        fn validate_node(
            &self,
            handle: Option<Handle>,
            lower: Option<&K>,
            upper: Option<&K>,
            errors: &mut Vec<String>,
        ) -> (u8, usize) {
            let Some(handle) = handle else {
                return (0, 0);
            };
            let node = self.nodes.get(handle);
            let key = node.key();
            if lower.is_some_and(|lower| key <= lower) || upper.is_some_and(|upper| key >= upper) {
                errors.push(format!("key {key:?} escapes bounds ({lower:?}, {upper:?})"));
            }

            let (left_height, left_size) = self.validate_node(node.left(), lower, Some(key), errors);
            let (right_height, right_size) = self.validate_node(node.right(), Some(key), upper, errors);

            if left_height.abs_diff(right_height) > 1 {
                errors.push(format!("key {key:?} unbalanced: left={left_height}, right={right_height}"));
            }
            let height = 1 + max(left_height, right_height);
            let size = 1 + left_size + right_size;
            if node.height() != height {
                errors.push(format!("key {key:?} caches height {} but is {height}", node.height()));
            }
            if node.size() != size {
                errors.push(format!("key {key:?} caches size {} but is {size}", node.size()));
            }
            (height, size)
        }
    }

    fn keys_of<K: Clone, V>(tree: &RawAvlTree<K, V>) -> Vec<K> {
        tree.iter().map(|(key, _)| key.clone()).collect()
    }

    #[test]
    fn ascending_inserts_rotate_left() {
        let mut tree = RawAvlTree::new();
        for key in 0..7 {
            tree.insert(key, ());
            tree.validate_invariants();
        }
        // A perfectly balanced 7-node tree.
        assert_eq!(tree.height(), 3);
        assert_eq!(keys_of(&tree), [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn zig_zag_inserts_double_rotate() {
        let mut left_right = RawAvlTree::new();
        for key in [3, 1, 2] {
            left_right.insert(key, ());
        }
        left_right.validate_invariants();
        assert_eq!(left_right.first(), Some((&1, &())));
        assert_eq!(left_right.entry(left_right.root.unwrap()), (&2, &()));

        let mut right_left = RawAvlTree::new();
        for key in [1, 3, 2] {
            right_left.insert(key, ());
        }
        right_left.validate_invariants();
        assert_eq!(right_left.entry(right_left.root.unwrap()), (&2, &()));
    }

    #[test]
    fn duplicate_insert_overwrites_value_only() {
        let mut tree = RawAvlTree::new();
        assert_eq!(tree.insert(1, "a"), None);
        assert_eq!(tree.insert(2, "b"), None);
        assert_eq!(tree.insert(1, "c"), Some("a"));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get_key_value(&1), Some((&1, &"c")));
        tree.validate_invariants();
    }

    #[test]
    fn remove_node_with_two_children_uses_successor() {
        let mut tree = RawAvlTree::new();
        for key in [50, 30, 70, 20, 40, 60, 80, 65] {
            tree.insert(key, key * 10);
        }
        assert_eq!(tree.remove(&50), Some((50, 500)));
        tree.validate_invariants();
        assert_eq!(tree.entry(tree.root.unwrap()), (&60, &600));
        assert_eq!(keys_of(&tree), [20, 30, 40, 60, 65, 70, 80]);

        // Successor is the direct right child.
        assert_eq!(tree.remove(&30), Some((30, 300)));
        tree.validate_invariants();
        assert_eq!(keys_of(&tree), [20, 40, 60, 65, 70, 80]);
    }

    #[test]
    fn remove_absent_key_changes_nothing() {
        let mut tree = RawAvlTree::new();
        assert_eq!(tree.remove(&1), None::<(i32, ())>);
        tree.insert(1, ());
        assert_eq!(tree.remove(&2), None);
        assert_eq!(tree.len(), 1);
        tree.validate_invariants();
    }

    #[test]
    fn removal_cascades_rotations() {
        // Fibonacci-shaped tree: deleting the shallow side's leaf forces
        // rotations at more than one ancestor.
        let mut tree = RawAvlTree::new();
        for key in [8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1] {
            tree.insert(key, ());
        }
        tree.validate_invariants();
        assert_eq!(tree.height(), 5);
        tree.remove(&12);
        tree.validate_invariants();
        assert_eq!(tree.height(), 4);
        assert_eq!(keys_of(&tree), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn slots_are_recycled_after_removal() {
        let mut tree = RawAvlTree::new();
        for key in 0..64 {
            tree.insert(key, ());
        }
        for key in 0..64 {
            tree.remove(&key);
        }
        for key in 100..164 {
            tree.insert(key, ());
        }
        tree.validate_invariants();
        assert_eq!(tree.nodes.len(), 64);
        assert!(tree.capacity() >= 64);
    }

    #[test]
    fn descent_buffers_hold_max_depth_inline() {
        assert_eq!(Path::new().inline_size(), MAX_DEPTH);

        // 2^16 - 2 keys (the test handle limit) stay well inside the inline path.
        let mut tree = RawAvlTree::new();
        tree.bulk_load((0..i32::from(u16::MAX - 1)).map(|key| (key, ())));
        assert!(usize::from(tree.height()) < MAX_DEPTH);
        assert!(tree.iter().map(|(key, _)| *key).eq(0..i32::from(u16::MAX - 1)));
        assert!(tree.iter().rev().map(|(key, _)| *key).eq((0..i32::from(u16::MAX - 1)).rev()));
        assert_eq!(tree.remove(&40_000), Some((40_000, ())));
        assert_eq!(tree.drain_to_vec().len(), usize::from(u16::MAX - 2));
    }

    #[test]
    fn empty_tree_queries() {
        let tree: RawAvlTree<i32, i32> = RawAvlTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert_eq!(tree.get_by_rank(0), None);
        assert_eq!(tree.rank_of(&0), None);
        assert_eq!(tree.floor_by(|key| key.cmp(&0)), None);
        assert_eq!(tree.ceiling_by(|key| key.cmp(&0)), None);
        assert_eq!(tree.iter().next(), None);
    }

    #[test]
    fn floor_and_ceiling_with_foreign_target() {
        let mut tree = RawAvlTree::new();
        tree.bulk_load((0..100).map(|key| (key * 2, ())));

        let probe = |target: f64| move |key: &i32| f64::from(*key).partial_cmp(&target).unwrap();
        assert_eq!(tree.floor_by(probe(23.3)), Some((&22, &())));
        assert_eq!(tree.ceiling_by(probe(23.3)), Some((&24, &())));
        assert_eq!(tree.floor_by(probe(24.0)), Some((&24, &())));
        assert_eq!(tree.ceiling_by(probe(24.0)), Some((&24, &())));
        assert_eq!(tree.floor_by(probe(-0.5)), None);
        assert_eq!(tree.ceiling_by(probe(198.5)), None);
        assert_eq!(tree.ceiling_by(probe(-0.5)), Some((&0, &())));
        assert_eq!(tree.floor_by(probe(198.5)), Some((&198, &())));
    }

    #[test]
    fn drain_to_vec_is_sorted_and_empties() {
        let mut tree = RawAvlTree::new();
        tree.bulk_load([(3, 'c'), (1, 'a'), (2, 'b'), (1, 'z')]);
        assert_eq!(tree.drain_to_vec(), [(1, 'z'), (2, 'b'), (3, 'c')]);
        assert!(tree.is_empty());
        assert_eq!(tree.root, None);
        tree.validate_invariants();
    }

    #[test]
    fn iter_from_both_ends_meets_once() {
        let mut tree = RawAvlTree::new();
        tree.bulk_load((0..10).map(|key| (key, ())));
        let mut iter = tree.iter();
        let mut seen = Vec::new();
        while let Some((front, _)) = iter.next() {
            seen.push(*front);
            if let Some((back, _)) = iter.next_back() {
                seen.push(*back);
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
        assert_eq!(iter.len(), 0);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Remove(i32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0i32..1000).prop_map(Op::Insert),
            2 => (0i32..1000).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn invariants_hold_after_every_operation(ops in prop::collection::vec(op_strategy(), 0..500)) {
            let mut tree: RawAvlTree<i32, i32> = RawAvlTree::new();
            let mut model: BTreeMap<i32, i32> = BTreeMap::new();

            for op in ops {
                match op {
                    Op::Insert(key) => {
                        prop_assert_eq!(tree.insert(key, key * 2), model.insert(key, key * 2));
                    }
                    Op::Remove(key) => {
                        prop_assert_eq!(tree.remove(&key), model.remove_entry(&key));
                    }
                }
                tree.validate_invariants();
            }

            let entries: Vec<_> = tree.iter().map(|(k, v)| (*k, *v)).collect();
            let expected: Vec<_> = model.into_iter().collect();
            prop_assert_eq!(entries, expected);
        }

        #[test]
        fn rank_and_select_agree_with_sorted_order(keys in prop::collection::vec(-500i32..500, 1..300)) {
            let mut tree = RawAvlTree::new();
            tree.bulk_load(keys.iter().map(|&key| (key, ())));
            let sorted = keys_of(&tree);

            for (rank, key) in sorted.iter().enumerate() {
                prop_assert_eq!(tree.get_by_rank(rank).map(|(k, _)| *k), Some(*key));
                prop_assert_eq!(tree.rank_of(key), Some(rank));
            }
            prop_assert_eq!(tree.get_by_rank(sorted.len()), None);
        }

        #[test]
        fn floor_ceiling_match_model(keys in prop::collection::vec(-500i32..500, 0..200), target in -600i32..600) {
            let mut tree = RawAvlTree::new();
            tree.bulk_load(keys.iter().map(|&key| (key, ())));
            let model: alloc::collections::BTreeSet<i32> = keys.into_iter().collect();

            let floor = tree.floor_by(|key| key.cmp(&target)).map(|(k, _)| *k);
            let ceiling = tree.ceiling_by(|key| key.cmp(&target)).map(|(k, _)| *k);
            prop_assert_eq!(floor, model.range(..=target).next_back().copied());
            prop_assert_eq!(ceiling, model.range(target..).next().copied());
        }
    }
}
