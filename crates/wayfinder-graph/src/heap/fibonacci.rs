//! Arena-backed Fibonacci heap.

use std::fmt;

use super::{HeapError, HeapResult};
use crate::id_gen::HeapId;

/// Handle to an entry in a [`FibonacciHeap`].
///
/// Handles are cheap to copy. They stay valid until their entry is
/// dequeued or deleted; afterwards every operation taking the handle fails
/// with [`HeapError::StaleHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapHandle {
    heap: HeapId,
    slot: usize,
    generation: u64,
}

/// A node of the forest.
///
/// `left`/`right` form a circular doubly linked sibling list; a singleton
/// points at itself. `value` is `None` while the slot is vacant.
#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    priority: f64,
    left: usize,
    right: usize,
    parent: Option<usize>,
    child: Option<usize>,
    /// Number of children.
    rank: usize,
    /// Set once the node has lost a child since it last became a child.
    marked: bool,
    generation: u64,
}

/// A min-priority queue backed by a Fibonacci heap.
///
/// Priorities are `f64` and may be any value except NaN, including the
/// infinities. Equal priorities are dequeued in unspecified order.
///
/// # Example
///
/// ```
/// use wayfinder_graph::heap::{FibonacciHeap, HeapError};
///
/// let mut heap = FibonacciHeap::new();
/// let handle = heap.enqueue('a', 4.0)?;
/// assert_eq!(heap.decrease_key(handle, 9.0),
///            Err(HeapError::PriorityIncrease { current: 4.0, requested: 9.0 }));
///
/// assert_eq!(heap.delete(handle)?, ('a', 4.0));
/// assert_eq!(heap.delete(handle), Err(HeapError::StaleHandle));
/// # Ok::<(), HeapError>(())
/// ```
pub struct FibonacciHeap<T> {
    id: HeapId,
    slots: Vec<Slot<T>>,
    /// Vacant slots available for reuse.
    free: Vec<usize>,
    /// The root with the smallest priority.
    min: Option<usize>,
    len: usize,
}

impl<T> Default for FibonacciHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FibonacciHeap<T> {
    /// Create an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty heap with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: HeapId::next(),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            min: None,
            len: 0,
        }
    }

    /// Returns the number of live entries.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap holds no entries.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Returns true if `handle` was issued by this heap and its entry has
    /// not been dequeued or deleted.
    pub fn contains(&self, handle: HeapHandle) -> bool {
        self.resolve(handle).is_ok()
    }

    /// Inserts `value` with the given priority.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::NanPriority`] if `priority` is NaN.
    pub fn enqueue(&mut self, value: T, priority: f64) -> HeapResult<HeapHandle> {
        if priority.is_nan() {
            return Err(HeapError::NanPriority);
        }

        let index = self.allocate(value, priority);
        self.add_root(index);
        self.len += 1;

        Ok(HeapHandle { heap: self.id, slot: index, generation: self.slots[index].generation })
    }

    /// Returns the entry with the smallest priority without removing it.
    pub fn peek_min(&self) -> Option<(&T, f64)> {
        let slot = &self.slots[self.min?];
        slot.value.as_ref().map(|value| (value, slot.priority))
    }

    /// Returns the handle of the entry with the smallest priority.
    pub fn min_handle(&self) -> Option<HeapHandle> {
        self.min.map(|index| self.handle_for(index))
    }

    /// Returns the current priority of an entry.
    pub fn priority(&self, handle: HeapHandle) -> HeapResult<f64> {
        let index = self.resolve(handle)?;
        Ok(self.slots[index].priority)
    }

    /// Returns a reference to an entry's value.
    pub fn value(&self, handle: HeapHandle) -> HeapResult<&T> {
        let index = self.resolve(handle)?;
        self.slots[index].value.as_ref().ok_or(HeapError::StaleHandle)
    }

    /// Returns a mutable reference to an entry's value.
    ///
    /// The value does not take part in ordering, so it may be changed freely.
    pub fn value_mut(&mut self, handle: HeapHandle) -> HeapResult<&mut T> {
        let index = self.resolve(handle)?;
        self.slots[index].value.as_mut().ok_or(HeapError::StaleHandle)
    }

    /// Lowers the priority of an entry.
    ///
    /// Setting the current priority again is allowed and changes nothing.
    /// To raise a priority, [`delete`](Self::delete) the entry and enqueue it
    /// again.
    ///
    /// # Errors
    ///
    /// - [`HeapError::ForeignHandle`] if the handle came from another heap
    /// - [`HeapError::StaleHandle`] if the entry was dequeued or deleted
    /// - [`HeapError::NanPriority`] if `priority` is NaN
    /// - [`HeapError::PriorityIncrease`] if `priority` exceeds the current one
    pub fn decrease_key(&mut self, handle: HeapHandle, priority: f64) -> HeapResult<()> {
        let index = self.resolve(handle)?;
        if priority.is_nan() {
            return Err(HeapError::NanPriority);
        }
        let current = self.slots[index].priority;
        if priority > current {
            return Err(HeapError::PriorityIncrease { current, requested: priority });
        }

        self.slots[index].priority = priority;
        match self.slots[index].parent {
            Some(parent) if priority < self.slots[parent].priority => {
                self.cut(index, parent);
                self.cascading_cut(parent);
            }
            Some(_) => {}
            None => {
                if self.min.is_some_and(|min| priority < self.slots[min].priority) {
                    self.min = Some(index);
                }
            }
        }
        Ok(())
    }

    /// Removes and returns the entry with the smallest priority.
    ///
    /// Returns `None` if the heap is empty.
    pub fn dequeue_min(&mut self) -> Option<(T, f64)> {
        let min = self.min?;

        if let Some(first) = self.slots[min].child.take() {
            for child in self.ring(first) {
                self.slots[child].parent = None;
                self.slots[child].marked = false;
                self.insert_after(min, child);
            }
            self.slots[min].rank = 0;
        }

        let next = self.slots[min].right;
        self.unlink(min);
        if next == min {
            self.min = None;
        } else {
            self.min = Some(next);
            self.consolidate();
        }

        self.len -= 1;
        self.release(min)
    }

    /// Removes an entry regardless of its priority.
    ///
    /// Returns the entry's value and the priority it held.
    ///
    /// # Errors
    ///
    /// - [`HeapError::ForeignHandle`] if the handle came from another heap
    /// - [`HeapError::StaleHandle`] if the entry was already dequeued or
    ///   deleted
    pub fn delete(&mut self, handle: HeapHandle) -> HeapResult<(T, f64)> {
        let index = self.resolve(handle)?;
        let priority = self.slots[index].priority;

        // Equivalent to a decrease to negative infinity, but the node is
        // forced to the root list so ties at -inf cannot keep it buried.
        self.slots[index].priority = f64::NEG_INFINITY;
        if let Some(parent) = self.slots[index].parent {
            self.cut(index, parent);
            self.cascading_cut(parent);
        }
        self.min = Some(index);

        match self.dequeue_min() {
            Some((value, _)) => Ok((value, priority)),
            None => Err(HeapError::StaleHandle),
        }
    }

    /// Moves every entry of `other` into this heap.
    ///
    /// Handles issued by `other` are not valid for this heap afterwards; they
    /// are rejected as [`HeapError::ForeignHandle`].
    pub fn merge(&mut self, other: Self) {
        let offset = self.slots.len();
        let shift = |index: usize| index + offset;

        self.slots.extend(other.slots.into_iter().map(|mut slot| {
            slot.left = shift(slot.left);
            slot.right = shift(slot.right);
            slot.parent = slot.parent.map(shift);
            slot.child = slot.child.map(shift);
            slot
        }));
        self.free.extend(other.free.into_iter().map(shift));
        self.len += other.len;

        let Some(other_min) = other.min.map(shift) else {
            return;
        };
        let Some(min) = self.min else {
            self.min = Some(other_min);
            return;
        };

        // Splice the two root rings together.
        let min_right = self.slots[min].right;
        let other_left = self.slots[other_min].left;
        self.slots[min].right = other_min;
        self.slots[other_min].left = min;
        self.slots[other_left].right = min_right;
        self.slots[min_right].left = other_left;

        if self.slots[other_min].priority < self.slots[min].priority {
            self.min = Some(other_min);
        }
    }

    /// Removes every entry. Outstanding handles become stale.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index);
            }
        }
        self.min = None;
        self.len = 0;
    }

    fn handle_for(&self, index: usize) -> HeapHandle {
        HeapHandle { heap: self.id, slot: index, generation: self.slots[index].generation }
    }

    /// Maps a handle to its slot index if it is live in this heap.
    fn resolve(&self, handle: HeapHandle) -> HeapResult<usize> {
        if handle.heap != self.id {
            return Err(HeapError::ForeignHandle);
        }
        match self.slots.get(handle.slot) {
            Some(slot) if slot.generation == handle.generation && slot.value.is_some() => {
                Ok(handle.slot)
            }
            _ => Err(HeapError::StaleHandle),
        }
    }

    fn allocate(&mut self, value: T, priority: f64) -> usize {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.value = Some(value);
                slot.priority = priority;
                slot.left = index;
                slot.right = index;
                slot.parent = None;
                slot.child = None;
                slot.rank = 0;
                slot.marked = false;
                index
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot {
                    value: Some(value),
                    priority,
                    left: index,
                    right: index,
                    parent: None,
                    child: None,
                    rank: 0,
                    marked: false,
                    generation: 0,
                });
                index
            }
        }
    }

    /// Vacates a detached slot and hands back its entry.
    fn release(&mut self, index: usize) -> Option<(T, f64)> {
        let slot = &mut self.slots[index];
        slot.generation = slot.generation.wrapping_add(1);
        slot.parent = None;
        slot.child = None;
        slot.rank = 0;
        slot.marked = false;
        let entry = slot.value.take().map(|value| (value, slot.priority));
        self.free.push(index);
        entry
    }

    /// Adds a detached node to the root list, updating the minimum.
    fn add_root(&mut self, index: usize) {
        self.slots[index].parent = None;
        match self.min {
            None => {
                self.slots[index].left = index;
                self.slots[index].right = index;
                self.min = Some(index);
            }
            Some(min) => {
                self.insert_after(min, index);
                if self.slots[index].priority < self.slots[min].priority {
                    self.min = Some(index);
                }
            }
        }
    }

    fn insert_after(&mut self, anchor: usize, index: usize) {
        let next = self.slots[anchor].right;
        self.slots[index].left = anchor;
        self.slots[index].right = next;
        self.slots[next].left = index;
        self.slots[anchor].right = index;
    }

    fn unlink(&mut self, index: usize) {
        let (left, right) = (self.slots[index].left, self.slots[index].right);
        self.slots[left].right = right;
        self.slots[right].left = left;
        self.slots[index].left = index;
        self.slots[index].right = index;
    }

    /// Collects the sibling ring starting at `start`.
    fn ring(&self, start: usize) -> Vec<usize> {
        let mut members = vec![start];
        let mut current = self.slots[start].right;
        while current != start {
            members.push(current);
            current = self.slots[current].right;
        }
        members
    }

    /// Detaches `index` from `parent` and makes it a root.
    fn cut(&mut self, index: usize, parent: usize) {
        if self.slots[parent].child == Some(index) {
            let next = self.slots[index].right;
            self.slots[parent].child = (next != index).then_some(next);
        }
        self.unlink(index);
        self.slots[parent].rank -= 1;
        self.slots[index].marked = false;
        self.add_root(index);
    }

    /// Walks up from a node that just lost a child: unmarked nodes get
    /// marked and stop the walk, marked nodes are cut and the walk continues
    /// with their parent. Roots are never marked.
    fn cascading_cut(&mut self, mut index: usize) {
        while let Some(parent) = self.slots[index].parent {
            if !self.slots[index].marked {
                self.slots[index].marked = true;
                return;
            }
            self.cut(index, parent);
            index = parent;
        }
    }

    /// Makes `child` (a root) a child of `parent` (another root).
    fn link(&mut self, child: usize, parent: usize) {
        self.slots[child].parent = Some(parent);
        self.slots[child].marked = false;
        match self.slots[parent].child {
            Some(first) => self.insert_after(first, child),
            None => {
                self.slots[child].left = child;
                self.slots[child].right = child;
                self.slots[parent].child = Some(child);
            }
        }
        self.slots[parent].rank += 1;
    }

    /// Merges roots of equal rank until all ranks are distinct, then rebuilds
    /// the root list and recomputes the minimum.
    fn consolidate(&mut self) {
        let Some(start) = self.min else {
            return;
        };

        let mut by_rank: Vec<Option<usize>> = Vec::with_capacity(rank_bound(self.len));
        for root in self.ring(start) {
            let mut tree = root;
            let mut rank = self.slots[tree].rank;
            loop {
                if rank >= by_rank.len() {
                    by_rank.resize(rank + 1, None);
                }
                let Some(mut other) = by_rank[rank].take() else {
                    break;
                };
                if self.slots[other].priority < self.slots[tree].priority {
                    std::mem::swap(&mut tree, &mut other);
                }
                self.link(other, tree);
                rank += 1;
            }
            by_rank[rank] = Some(tree);
        }

        self.min = None;
        for root in by_rank.into_iter().flatten() {
            self.add_root(root);
        }
    }
}

/// Upper bound on root ranks for a heap of `len` entries: log_phi(len) + 2.
fn rank_bound(len: usize) -> usize {
    let bits = (usize::BITS - len.leading_zeros()) as usize;
    bits * 3 / 2 + 2
}

impl<T: fmt::Debug> fmt::Debug for FibonacciHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibonacciHeap")
            .field("len", &self.len)
            .field("min", &self.peek_min())
            .finish()
    }
}

/// Renders the forest as a tree, one `priority, value` line per entry.
impl<T: fmt::Debug> fmt::Display for FibonacciHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(min) = self.min else {
            return f.write_str("<empty>");
        };

        let mut stack: Vec<(usize, String, bool)> = Vec::new();
        let push_ring = |stack: &mut Vec<_>, start: usize, prefix: &str| {
            let members = self.ring(start);
            let last = members.len() - 1;
            for (position, &member) in members.iter().enumerate().rev() {
                stack.push((member, prefix.to_owned(), position == last));
            }
        };

        push_ring(&mut stack, min, "");
        while let Some((index, prefix, is_last)) = stack.pop() {
            let slot = &self.slots[index];
            let branch = if is_last { "└─" } else { "├─" };
            let joint = if slot.child.is_some() { "┐" } else { "─" };
            match &slot.value {
                Some(value) => writeln!(f, "{prefix}{branch}{joint} {}, {value:?}", slot.priority)?,
                None => writeln!(f, "{prefix}{branch}{joint} {}", slot.priority)?,
            }
            if let Some(child) = slot.child {
                let nested = format!("{prefix}{}", if is_last { "  " } else { "│ " });
                push_ring(&mut stack, child, &nested);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
impl<T> FibonacciHeap<T> {
    /// Checks every structural invariant, panicking on the first violation.
    pub(crate) fn assert_invariants(&self) {
        let Some(min) = self.min else {
            assert_eq!(self.len, 0, "empty heap must report zero entries");
            return;
        };

        let roots = self.ring(min);
        let mut live = 0;
        let mut stack = Vec::new();
        for &root in &roots {
            assert_eq!(self.slots[root].parent, None, "root {root} has a parent");
            assert!(
                self.slots[min].priority <= self.slots[root].priority,
                "min is not the smallest root"
            );
            stack.push(root);
        }

        while let Some(index) = stack.pop() {
            let slot = &self.slots[index];
            live += 1;
            assert!(slot.value.is_some(), "linked slot {index} is vacant");
            assert!(!slot.priority.is_nan());
            assert_eq!(self.slots[slot.left].right, index, "broken left link at {index}");
            assert_eq!(self.slots[slot.right].left, index, "broken right link at {index}");

            let children = slot.child.map(|c| self.ring(c)).unwrap_or_default();
            assert_eq!(slot.rank, children.len(), "rank mismatch at {index}");
            for child in children {
                assert_eq!(self.slots[child].parent, Some(index));
                assert!(slot.priority <= self.slots[child].priority, "heap order at {index}");
                stack.push(child);
            }
        }
        assert_eq!(live, self.len, "reachable entries differ from len");
    }

    /// Checks that no two roots share a rank.
    pub(crate) fn assert_distinct_root_ranks(&self) {
        if let Some(min) = self.min {
            let mut ranks: Vec<usize> = self.ring(min).iter().map(|&r| self.slots[r].rank).collect();
            let total = ranks.len();
            ranks.sort_unstable();
            ranks.dedup();
            assert_eq!(ranks.len(), total, "roots share a rank after consolidation");
        }
    }

    pub(crate) fn is_marked(&self, handle: HeapHandle) -> bool {
        self.resolve(handle).is_ok_and(|index| self.slots[index].marked)
    }

    pub(crate) fn is_root(&self, handle: HeapHandle) -> bool {
        self.resolve(handle).is_ok_and(|index| self.slots[index].parent.is_none())
    }
}
