//! Indexed Binary Heap for Rust
//!
//! This crate provides a binary max-heap whose elements carry their own slot
//! index. Knowing where every element lives lets the heap do more than a
//! textbook priority queue:
//!
//! - **Remove any element** in O(log n) with [`IndexedBinaryHeap::remove_at`]
//! - **Re-prioritize any element** in O(log n) with [`IndexedBinaryHeap::update`]
//!   after its key changed (increase *or* decrease)
//! - **Membership test** in O(1) with [`IndexedBinaryHeap::contains`]
//!
//! Elements implement [`HeapOrderable`]: a three-way comparison plus a
//! read/write slot index that only the heap writes. [`Prioritized`] is a
//! ready-made element, [`Shared`] lets elements outlive the heap, and
//! `std::cmp::Reverse` turns the max-heap into a min-heap.
//!
//! Typical callers are pathfinding open sets and event schedulers, where an
//! entry's priority improves while it is queued.
//!
//! # Example
//!
//! ```rust
//! use indexed_binary_heap::{IndexedBinaryHeap, Prioritized};
//!
//! let mut heap = IndexedBinaryHeap::new();
//! for (priority, name) in [(5, "e"), (3, "c"), (8, "h"), (1, "a")] {
//!     heap.push(Prioritized::new(priority, name));
//! }
//!
//! assert_eq!(heap.peek().map(|e| e.priority), Some(8));
//!
//! // Drop "c" without touching the rest
//! let slot = heap.iter().position(|e| e.value == "c").unwrap();
//! assert_eq!(heap.remove_at(slot).map(|e| e.value), Some("c"));
//!
//! // Iterating `&mut heap` drains it, greatest first
//! let rest: Vec<_> = (&mut heap).into_iter().map(|e| e.priority).collect();
//! assert_eq!(rest, vec![8, 5, 1]);
//! assert!(heap.is_empty());
//! ```
//!
//! # Concurrency
//!
//! The heap is a plain single-threaded structure. Wrap the whole heap in a
//! mutex to share it; sift operations touch several slots per call.

pub mod indexed_binary;
pub mod prioritized;
pub mod shared;
pub mod traits;

// Re-export the main types for convenience
pub use indexed_binary::{DrainSorted, IndexedBinaryHeap, IntoIterSorted};
pub use prioritized::Prioritized;
pub use shared::Shared;
pub use traits::{HeapError, HeapOrderable, NOT_IN_HEAP};
