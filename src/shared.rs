//! Shared element handles
//!
//! An [`IndexedBinaryHeap`](crate::IndexedBinaryHeap) owns what it stores.
//! When the caller needs elements that outlive the heap, or wants to mutate
//! a key from outside and then tell the heap about it, store [`Shared`]
//! handles instead: the heap holds one clone, the caller keeps another.
//!
//! `Shared` compares by identity, so [`contains`](crate::IndexedBinaryHeap::contains)
//! asks "is *this* element in the heap", not "is an equal value in the heap".
//!
//! # Example
//!
//! ```rust
//! use indexed_binary_heap::{HeapOrderable, IndexedBinaryHeap, Prioritized, Shared};
//!
//! let mut heap = IndexedBinaryHeap::new();
//! let a = Shared::new(Prioritized::new(1, "a"));
//! let b = Shared::new(Prioritized::new(5, "b"));
//! heap.push(a.clone());
//! heap.push(b.clone());
//!
//! // Raise a's key from the outside, then re-sift it
//! a.borrow_mut().priority = 9;
//! heap.update(a.heap_index());
//!
//! assert!(heap.peek().is_some_and(|top| top.ptr_eq(&a)));
//! ```
//!
//! # Borrowing
//!
//! The heap borrows the inner value while it compares or re-indexes. Holding
//! a `borrow_mut()` guard across a heap call panics, as with any `RefCell`.
//!
//! # One heap, one slot
//!
//! A handle carries a single index, so it may sit in at most one heap, and
//! only once. Pushing the same handle twice, or into a second heap, lets the
//! later write win: the earlier slot stops being found by `contains`, and
//! `update` with the handle's index re-sifts the wrong slot. To copy a heap
//! of handles, build the copy from [`detach`](Shared::detach)ed elements.

use std::cell::{Ref, RefCell, RefMut};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::traits::{HeapOrderable, NOT_IN_HEAP};

/// Reference-counted handle to a heap element, compared by identity
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    /// Wraps `value` in a new handle
    pub fn new(value: T) -> Self {
        Shared(Rc::new(RefCell::new(value)))
    }

    /// Immutably borrows the element
    ///
    /// # Panics
    ///
    /// Panics if the element is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Mutably borrows the element
    ///
    /// After changing the ordering key of an element that is in a heap, call
    /// `update` with its [`heap_index`](HeapOrderable::heap_index).
    ///
    /// # Panics
    ///
    /// Panics if the element is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Returns true if both handles point to the same element
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns a handle to a fresh copy of the element, not yet in any heap
    ///
    /// Unlike `clone`, the result shares nothing with `self`.
    pub fn detach(&self) -> Self
    where
        T: Clone + HeapOrderable,
    {
        let mut value = self.0.borrow().clone();
        value.set_heap_index(NOT_IN_HEAP);
        Shared::new(value)
    }

    /// Returns the element if this is the last handle to it
    pub fn try_unwrap(self) -> Result<T, Self> {
        Rc::try_unwrap(self.0)
            .map(RefCell::into_inner)
            .map_err(Shared)
    }
}

impl<T: HeapOrderable> HeapOrderable for Shared<T> {
    fn heap_cmp(&self, other: &Self) -> Ordering {
        self.0.borrow().heap_cmp(&other.0.borrow())
    }

    fn heap_index(&self) -> usize {
        self.0.borrow().heap_index()
    }

    fn set_heap_index(&mut self, index: usize) {
        self.0.borrow_mut().set_heap_index(index);
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for Shared<T> {}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(inner) => f.debug_tuple("Shared").field(&*inner).finish(),
            Err(_) => f.write_str("Shared(<borrowed>)"),
        }
    }
}
