//! Ready-made heap element pairing a priority with a payload
//!
//! Most callers do not need a custom [`HeapOrderable`] type: wrapping the
//! payload in [`Prioritized`] orders it by `priority` and stores the slot
//! alongside. Use `std::cmp::Reverse<Prioritized<P, V>>` for smallest-first.
//!
//! ```rust
//! use std::cmp::Reverse;
//! use indexed_binary_heap::{IndexedBinaryHeap, Prioritized};
//!
//! let mut open_set = IndexedBinaryHeap::new();
//! open_set.push(Reverse(Prioritized::new(7u32, 'a')));
//! open_set.push(Reverse(Prioritized::new(2u32, 'b')));
//! assert_eq!(open_set.pop().map(|Reverse(e)| e.value), Some('b'));
//! ```

use std::cmp::Ordering;

use crate::traits::{HeapOrderable, NOT_IN_HEAP};

/// A payload ordered by an explicit priority
///
/// Equality compares `priority` and `value` but never the slot, so a clone
/// taken while the element was in the heap still matches it in
/// [`contains`](crate::IndexedBinaryHeap::contains).
#[derive(Debug, Clone)]
pub struct Prioritized<P, V> {
    /// Ordering key; greater sorts toward the root
    pub priority: P,
    /// Caller data
    pub value: V,
    heap_index: usize,
}

impl<P, V> Prioritized<P, V> {
    /// Creates an element that is not yet in any heap
    pub fn new(priority: P, value: V) -> Self {
        Self {
            priority,
            value,
            heap_index: NOT_IN_HEAP,
        }
    }

    /// Splits the element into priority and payload
    pub fn into_parts(self) -> (P, V) {
        (self.priority, self.value)
    }
}

impl<P: Ord, V> HeapOrderable for Prioritized<P, V> {
    fn heap_cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }

    fn heap_index(&self) -> usize {
        self.heap_index
    }

    fn set_heap_index(&mut self, index: usize) {
        self.heap_index = index;
    }
}

impl<P: PartialEq, V: PartialEq> PartialEq for Prioritized<P, V> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.value == other.value
    }
}

impl<P: Eq, V: Eq> Eq for Prioritized<P, V> {}
