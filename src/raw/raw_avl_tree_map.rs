use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;

use super::arena::Arena;
use super::handle::Handle;
use super::height::Height;
use super::node::{Node, Side};
use crate::comparator::Comparator;

/// The core AVL tree backing `AvlTreeMap`.
#[derive(Clone)]
pub(crate) struct RawAvlTreeMap<K, V, C> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    comparator: C,
}

impl<K, V, C> RawAvlTreeMap<K, V, C> {
    /// Creates a new, empty tree ordered by `comparator`.
    pub(crate) const fn new(comparator: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            comparator,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            comparator,
        }
    }

    /// Number of key-value pairs, one per live node.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Detaches every node.
    pub(crate) fn clear(&mut self) {
        log::debug!("clearing tree of {} entries", self.len());
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Height of the whole tree, 0 when empty.
    pub(crate) fn height(&self) -> usize {
        self.height_of(self.root).to_usize()
    }

    #[inline]
    fn height_of(&self, handle: Option<Handle>) -> Height {
        handle.map_or(Height::ZERO, |h| self.nodes.get(h).height())
    }

    /// The leftmost (smallest) node.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Left))
    }

    /// The rightmost (largest) node.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Right))
    }

    /// In-order successor, found through child and parent links only.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        self.step(handle, Side::Right)
    }

    /// In-order predecessor, found through child and parent links only.
    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        self.step(handle, Side::Left)
    }

    fn extreme(&self, mut handle: Handle, side: Side) -> Handle {
        while let Some(child) = self.nodes.get(handle).child(side) {
            handle = child;
        }
        handle
    }

    // With a subtree on `side`, the neighbour is that subtree's nearest node. Otherwise climb
    // until we leave a subtree through its opposite edge.
    fn step(&self, handle: Handle, side: Side) -> Option<Handle> {
        let node = self.nodes.get(handle);
        if let Some(child) = node.child(side) {
            return Some(self.extreme(child, side.opposite()));
        }

        let mut current = handle;
        let mut top = node.top();
        while let Some(parent) = top {
            let parent_node = self.nodes.get(parent);
            if parent_node.child(side) != Some(current) {
                return Some(parent);
            }
            current = parent;
            top = parent_node.top();
        }
        None
    }

    /// Handles of every node in ascending key order.
    fn in_order(&self) -> Vec<Handle> {
        let mut handles = Vec::with_capacity(self.len());
        let mut current = self.first();
        while let Some(handle) = current {
            handles.push(handle);
            current = self.successor(handle);
        }
        handles
    }

    /// Moves every key-value pair out in ascending key order, leaving the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let order = self.in_order();
        let entries = order.into_iter().map(|handle| self.nodes.take(handle).into_key_value()).collect();

        self.nodes.clear();
        self.root = None;

        entries
    }

    /// Every key with a mutable reference to its value, in ascending key order.
    pub(crate) fn entries_mut(&mut self) -> Vec<(&K, &mut V)> {
        // Rank each slot first; the arena can then be walked once in slot order while handing out
        // disjoint borrows.
        let mut ranks: Vec<usize> = alloc::vec![0; self.nodes.slot_count()];
        for (rank, handle) in self.in_order().into_iter().enumerate() {
            ranks[handle.index()] = rank;
        }

        let mut ordered: Vec<Option<(&K, &mut V)>> = (0..self.len()).map(|_| None).collect();
        for (handle, node) in self.nodes.iter_mut() {
            ordered[ranks[handle.index()]] = Some(node.key_value_mut());
        }
        ordered.into_iter().flatten().collect()
    }

    fn update_height(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let height = Height::above(self.height_of(node.left()), self.height_of(node.right()));
        self.nodes.get_mut(handle).set_height(height);
    }

    fn balance_of(&self, handle: Handle) -> i16 {
        let node = self.nodes.get(handle);
        Height::balance(self.height_of(node.left()), self.height_of(node.right()))
    }

    /// Walks from `start` to the root, refreshing heights and rotating wherever a node's children
    /// differ in height by two.
    fn rebalance_from(&mut self, start: Handle) {
        let mut current = Some(start);
        while let Some(handle) = current {
            self.update_height(handle);

            let balance = self.balance_of(handle);
            let subtree = if balance > 1 {
                self.restore(handle, Side::Left)
            } else if balance < -1 {
                self.restore(handle, Side::Right)
            } else {
                handle
            };

            current = self.nodes.get(subtree).top();
        }
    }

    /// Restores balance at `handle`, whose `heavy` subtree is two levels taller than the other.
    /// Returns the node now heading the subtree.
    fn restore(&mut self, handle: Handle, heavy: Side) -> Handle {
        let child = self
            .nodes
            .get(handle)
            .child(heavy)
            .expect("`RawAvlTreeMap::restore()` - heavy side has no child!");

        // Zig-zag: straighten the child first so a single rotation at `handle` suffices.
        let child_node = self.nodes.get(child);
        let leans_inward = self.height_of(child_node.child(heavy.opposite())) > self.height_of(child_node.child(heavy));
        if leans_inward {
            self.rotate(child, heavy);
        }

        self.rotate(handle, heavy.opposite())
    }

    /// Rotates the subtree at `handle` toward `side`: the child on the opposite side is lifted
    /// into `handle`'s position and `handle` becomes its `side` child. Returns the lifted node.
    fn rotate(&mut self, handle: Handle, side: Side) -> Handle {
        let lifted_from = side.opposite();
        let pivot = self
            .nodes
            .get(handle)
            .child(lifted_from)
            .expect("`RawAvlTreeMap::rotate()` - no child to lift!");
        let inner = self.nodes.get(pivot).child(side);
        let top = self.nodes.get(handle).top();

        self.nodes.get_mut(handle).set_child(lifted_from, inner);
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).set_top(Some(handle));
        }

        self.nodes.get_mut(pivot).set_child(side, Some(handle));
        self.nodes.get_mut(handle).set_top(Some(pivot));
        self.replace_child(top, handle, pivot);

        // Bottom-up: `handle` now sits below `pivot`.
        self.update_height(handle);
        self.update_height(pivot);

        log::trace!("rotated {side:?} at {handle:?}, {pivot:?} lifted");
        pivot
    }

    /// Puts `new` where `old` hung under `top`, or makes it the root.
    fn replace_child(&mut self, top: Option<Handle>, old: Handle, new: Handle) {
        self.nodes.get_mut(new).set_top(top);
        match top {
            Some(parent) => {
                let parent = self.nodes.get_mut(parent);
                let side = parent
                    .side_of(old)
                    .expect("`RawAvlTreeMap::replace_child()` - `old` is not a child of `top`!");
                parent.set_child(side, Some(new));
            }
            None => self.root = Some(new),
        }
    }
}

impl<K, V, C> RawAvlTreeMap<K, V, C> {
    /// Descends from the root by comparator to the node holding `key`.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let mut current = self.root?;
        loop {
            let node = self.nodes.get(current);
            current = match self.comparator.compare(key, node.key().borrow()) {
                Ordering::Equal => return Some(current),
                Ordering::Less => node.left()?,
                Ordering::Greater => node.right()?,
            };
        }
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.find(key).map(|handle| self.nodes.get(handle).value())
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let handle = self.find(key)?;
        Some(self.nodes.get_mut(handle).value_mut())
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let node = self.nodes.get(self.find(key)?);
        Some((node.key(), node.value()))
    }

    /// Inserts `key`, or overwrites the value of an equal key in place.
    /// Returns the replaced value; `None` means a node was created and the tree rebalanced.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        C: Comparator<K>,
    {
        let Some(mut current) = self.root else {
            let handle = self.nodes.alloc(Node::new(key, value, None));
            self.root = Some(handle);
            return None;
        };

        loop {
            let side = match self.comparator.compare(&key, self.nodes.get(current).key()) {
                Ordering::Equal => {
                    let slot = self.nodes.get_mut(current).value_mut();
                    return Some(core::mem::replace(slot, value));
                }
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };

            match self.nodes.get(current).child(side) {
                Some(child) => current = child,
                None => {
                    let handle = self.nodes.alloc(Node::new(key, value, Some(current)));
                    self.nodes.get_mut(current).set_child(side, Some(handle));
                    log::trace!("attached {handle:?} on the {side:?} of {current:?}");

                    self.rebalance_from(current);
                    return None;
                }
            }
        }
    }
}
