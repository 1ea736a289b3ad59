//! Indexed Binary Heap implementation
//!
//! A binary max-heap backed by a `Vec`, where every element records its own
//! slot through [`HeapOrderable`]. Because an element always knows where it
//! lives, the heap can remove or re-prioritize *any* element in O(log n), not
//! just the root.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `push`         | O(log n)   |
//! | `pop`          | O(log n)   |
//! | `peek`         | O(1)       |
//! | `remove_at`    | O(log n)   |
//! | `update`       | O(log n)   |
//! | `contains`     | O(1)       |
//! | `clear`        | O(1)*      |
//! | `drain_sorted` | O(n log n) |
//!
//! \* plus dropping the elements.
//!
//! # Out-of-range indices
//!
//! [`remove_at`](IndexedBinaryHeap::remove_at), [`update`](IndexedBinaryHeap::update)
//! and [`modify`](IndexedBinaryHeap::modify) treat an index past the end as a
//! no-op and log it at debug level. Use [`try_remove_at`](IndexedBinaryHeap::try_remove_at)
//! or [`try_update`](IndexedBinaryHeap::try_update) to get a [`HeapError`] instead.
//!
//! # Example
//!
//! ```rust
//! use indexed_binary_heap::{IndexedBinaryHeap, Prioritized};
//!
//! let mut heap = IndexedBinaryHeap::new();
//! heap.push(Prioritized::new(3, "three"));
//! heap.push(Prioritized::new(1, "one"));
//! heap.push(Prioritized::new(2, "two"));
//!
//! // Bump "one" to the top without removing it
//! let slot = heap.iter().position(|e| e.value == "one").unwrap();
//! heap.modify(slot, |e| e.priority = 10);
//!
//! let order: Vec<_> = heap.drain_sorted().map(|e| e.value).collect();
//! assert_eq!(order, ["one", "three", "two"]);
//! assert!(heap.is_empty());
//! ```

use std::cmp::Ordering;
use std::iter::FusedIterator;

use log::{debug, trace};

use crate::traits::{HeapError, HeapOrderable, NOT_IN_HEAP};

/// A binary max-heap of self-indexing elements
///
/// For every occupied slot `i`, the element there reports `heap_index() == i`
/// once any operation returns, and no child compares greater than its parent.
///
/// The heap is not `Clone`: a copy of a heap of [`Shared`](crate::Shared)
/// handles would write the same indices as the original. Copy elements
/// explicitly and collect them into a new heap instead.
///
/// ```compile_fail
/// use indexed_binary_heap::{IndexedBinaryHeap, Prioritized};
///
/// let heap: IndexedBinaryHeap<Prioritized<i32, ()>> = IndexedBinaryHeap::new();
/// let copy: IndexedBinaryHeap<Prioritized<i32, ()>> = heap.clone();
/// ```
#[derive(Debug)]
pub struct IndexedBinaryHeap<T: HeapOrderable> {
    /// Elements in heap order; the slot of each element is its heap index
    items: Vec<T>,
}

impl<T: HeapOrderable> IndexedBinaryHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a new empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Shrinks the backing storage to fit the current length
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }

    /// Returns the greatest element without removing it, or `None` if empty
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the element stored at `index`, if that slot is occupied
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Inserts an element
    ///
    /// The element's index is set to the first free slot, then it is sifted
    /// up while it compares strictly greater than its parent.
    #[doc(alias = "add")]
    pub fn push(&mut self, mut item: T) {
        let index = self.items.len();
        item.set_heap_index(index);
        self.items.push(item);
        self.sift_up(index);
    }

    /// Removes and returns the greatest element, or `None` if empty
    #[doc(alias = "poll")]
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        self.remove_at(0)
    }

    /// Removes and returns the element at `index`
    ///
    /// The last element is swapped into the vacated slot and then sifted up,
    /// or down if it did not move up. The returned element's index is reset
    /// to [`NOT_IN_HEAP`]. An out-of-range index is a no-op returning `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            debug!(
                "remove_at: index {} out of bounds (len {}), ignoring",
                index,
                self.items.len()
            );
            return None;
        }

        let last = self.items.len() - 1;
        self.swap(index, last);
        let mut removed = self.items.pop()?;
        removed.set_heap_index(NOT_IN_HEAP);

        if index < self.items.len() {
            self.restore(index);
        }

        Some(removed)
    }

    /// Like [`remove_at`](Self::remove_at), but reports an out-of-range index
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, HeapError> {
        let len = self.items.len();
        self.remove_at(index)
            .ok_or(HeapError::IndexOutOfBounds { index, len })
    }

    /// Removes `item` if it is currently stored in this heap
    pub fn remove(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        if self.contains(item) {
            self.remove_at(item.heap_index())
        } else {
            None
        }
    }

    /// Re-establishes heap order after the element at `index` changed its key
    ///
    /// Tries to sift the element up first; only if it stays put is it sifted
    /// down. An out-of-range index is a no-op.
    pub fn update(&mut self, index: usize) {
        if index >= self.items.len() {
            debug!(
                "update: index {} out of bounds (len {}), ignoring",
                index,
                self.items.len()
            );
            return;
        }
        self.restore(index);
    }

    /// Like [`update`](Self::update), but reports an out-of-range index
    pub fn try_update(&mut self, index: usize) -> Result<(), HeapError> {
        let len = self.items.len();
        if index >= len {
            return Err(HeapError::IndexOutOfBounds { index, len });
        }
        self.restore(index);
        Ok(())
    }

    /// Calls [`update`](Self::update) on `item`'s slot if `item` is in this heap
    ///
    /// Returns whether the item was found.
    pub fn update_item(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        if self.contains(item) {
            self.restore(item.heap_index());
            true
        } else {
            false
        }
    }

    /// Mutates the element at `index` in place and restores heap order
    ///
    /// Returns `false` without calling `f` if the slot is not occupied.
    pub fn modify<F>(&mut self, index: usize, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(item) => {
                f(item);
                // f may have touched the back-reference
                item.set_heap_index(index);
            }
            None => {
                debug!(
                    "modify: index {} out of bounds (len {}), ignoring",
                    index, len
                );
                return false;
            }
        }
        self.restore(index);
        true
    }

    /// Checks membership in O(1) through the element's own index
    ///
    /// Only meaningful while nothing outside the heap writes the index; after
    /// [`clear`](Self::clear) the indices of dropped elements are stale.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items
            .get(item.heap_index())
            .is_some_and(|stored| stored == item)
    }

    /// Removes all elements
    ///
    /// Indices held by the dropped elements (or by shared handles to them)
    /// are left stale.
    pub fn clear(&mut self) {
        trace!("clear: discarding {} elements", self.items.len());
        self.items.clear();
    }

    /// Removes and returns the greatest element, discarding everything else
    pub fn pop_and_clear(&mut self) -> Option<T> {
        let root = self.pop();
        if !self.items.is_empty() {
            trace!("pop_and_clear: discarding {} elements", self.items.len());
        }
        self.items.clear();
        root
    }

    /// Returns a draining iterator yielding elements in descending order
    ///
    /// Each step is a [`pop`](Self::pop), so consuming the iterator empties
    /// the heap and a second pass yields nothing. Elements not consumed stay
    /// in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { heap: self }
    }

    /// Returns a non-destructive iterator over the elements in slot order
    ///
    /// The order is the heap layout, not sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the elements in slot order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the heap, returning the backing vector in slot order
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Checks heap order and index coherence for every slot
    pub fn verify_invariants(&self) -> bool {
        self.items.iter().enumerate().all(|(i, item)| {
            item.heap_index() == i
                && (i == 0 || self.items[(i - 1) / 2].heap_cmp(item) != Ordering::Less)
        })
    }

    /// Sifts the moved-in element at `index` up, or else down
    fn restore(&mut self, index: usize) {
        if self.sift_up(index) == index {
            self.sift_down(index);
        }
    }

    /// Move element at index up to maintain heap property, returning its final slot
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index].heap_cmp(&self.items[parent]) == Ordering::Greater {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            // right wins only when strictly greater
            let child = if right < len
                && self.items[right].heap_cmp(&self.items[left]) == Ordering::Greater
            {
                right
            } else {
                left
            };

            if self.items[child].heap_cmp(&self.items[index]) == Ordering::Greater {
                self.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    /// Exchanges two slots and rewrites both back-references
    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.items[a].set_heap_index(a);
        self.items[b].set_heap_index(b);
    }
}

impl<T: HeapOrderable> Default for IndexedBinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a heap in O(n) by sifting down every internal slot, bottom-up
impl<T: HeapOrderable> From<Vec<T>> for IndexedBinaryHeap<T> {
    fn from(items: Vec<T>) -> Self {
        let mut heap = Self { items };
        for (i, item) in heap.items.iter_mut().enumerate() {
            item.set_heap_index(i);
        }
        for i in (0..heap.items.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }
}

impl<T: HeapOrderable> Extend<T> for IndexedBinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.items.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: HeapOrderable> FromIterator<T> for IndexedBinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = IndexedBinaryHeap::new();
        heap.extend(iter);
        heap
    }
}

/// Draining iterator returned by [`IndexedBinaryHeap::drain_sorted`]
#[derive(Debug)]
pub struct DrainSorted<'a, T: HeapOrderable> {
    heap: &'a mut IndexedBinaryHeap<T>,
}

impl<T: HeapOrderable> Iterator for DrainSorted<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: HeapOrderable> ExactSizeIterator for DrainSorted<'_, T> {}

impl<T: HeapOrderable> FusedIterator for DrainSorted<'_, T> {}

/// Owning iterator yielding elements in descending order
#[derive(Debug)]
pub struct IntoIterSorted<T: HeapOrderable> {
    heap: IndexedBinaryHeap<T>,
}

impl<T: HeapOrderable> Iterator for IntoIterSorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: HeapOrderable> ExactSizeIterator for IntoIterSorted<T> {}

impl<T: HeapOrderable> FusedIterator for IntoIterSorted<T> {}

impl<T: HeapOrderable> IntoIterator for IndexedBinaryHeap<T> {
    type Item = T;
    type IntoIter = IntoIterSorted<T>;

    fn into_iter(self) -> IntoIterSorted<T> {
        IntoIterSorted { heap: self }
    }
}

/// Iterating a `&mut` heap drains it in descending order
impl<'a, T: HeapOrderable> IntoIterator for &'a mut IndexedBinaryHeap<T> {
    type Item = T;
    type IntoIter = DrainSorted<'a, T>;

    fn into_iter(self) -> DrainSorted<'a, T> {
        self.drain_sorted()
    }
}
