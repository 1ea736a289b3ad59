//! Capability trait for heap elements
//!
//! An [`IndexedBinaryHeap`](crate::IndexedBinaryHeap) does not keep a side
//! table from elements to slots. Instead every element carries its own slot
//! number, which the heap rewrites on every swap. This module defines the
//! contract an element type has to satisfy for that to work:
//!
//! - [`HeapOrderable::heap_cmp`]: a total order; `Greater` sorts toward the root
//! - [`HeapOrderable::heap_index`] / [`HeapOrderable::set_heap_index`]: the
//!   back-reference to the element's current slot
//!
//! The heap is a max-heap with respect to `heap_cmp`. Wrap elements in
//! [`std::cmp::Reverse`] to get min-heap behavior.

use std::cmp::{Ordering, Reverse};
use std::fmt;

/// Index value of an element that is not stored in any heap.
///
/// Elements handed back by `pop`, `remove_at` and friends carry this value.
pub const NOT_IN_HEAP: usize = usize::MAX;

/// Error type for the strict (`try_*`) heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The slot index is not occupied
    IndexOutOfBounds {
        /// The index that was requested
        index: usize,
        /// The number of elements in the heap at the time
        len: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::IndexOutOfBounds { index, len } => {
                write!(f, "heap index {} is out of bounds (len {})", index, len)
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// An element that can live in an [`IndexedBinaryHeap`](crate::IndexedBinaryHeap)
///
/// # Contract
///
/// - `heap_cmp` must be a total order and must not change while the element
///   is in a heap, except between a mutation and the matching `update` call.
/// - `set_heap_index` is called by the heap only. Code outside the heap reads
///   `heap_index` but never writes it while the element is heap-owned.
/// - After a heap is cleared, the indices of the dropped elements are stale.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use indexed_binary_heap::{HeapOrderable, IndexedBinaryHeap};
///
/// #[derive(Debug, PartialEq)]
/// struct Job {
///     id: u32,
///     urgency: u8,
///     slot: usize,
/// }
///
/// impl HeapOrderable for Job {
///     fn heap_cmp(&self, other: &Self) -> Ordering {
///         self.urgency.cmp(&other.urgency)
///     }
///
///     fn heap_index(&self) -> usize {
///         self.slot
///     }
///
///     fn set_heap_index(&mut self, index: usize) {
///         self.slot = index;
///     }
/// }
///
/// let mut heap = IndexedBinaryHeap::new();
/// heap.push(Job { id: 1, urgency: 3, slot: 0 });
/// heap.push(Job { id: 2, urgency: 9, slot: 0 });
/// assert_eq!(heap.peek().map(|job| job.id), Some(2));
/// ```
pub trait HeapOrderable {
    /// Three-way comparison; the greater element sorts toward the root
    fn heap_cmp(&self, other: &Self) -> Ordering;

    /// The slot this element occupies, or a stale value when not in a heap
    fn heap_index(&self) -> usize;

    /// Records the element's new slot (heap-internal)
    fn set_heap_index(&mut self, index: usize);
}

/// Reverses the order of the wrapped element, turning the max-heap into a min-heap
impl<T: HeapOrderable> HeapOrderable for Reverse<T> {
    fn heap_cmp(&self, other: &Self) -> Ordering {
        other.0.heap_cmp(&self.0)
    }

    fn heap_index(&self) -> usize {
        self.0.heap_index()
    }

    fn set_heap_index(&mut self, index: usize) {
        self.0.set_heap_index(index);
    }
}
