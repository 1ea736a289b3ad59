//! Invariant proofs for IndexedBinaryHeap
//!
//! These proofs verify, for all inputs up to a small bound:
//! - Heap order: no child compares greater than its parent
//! - Index coherence: every element reports its own slot
//! - Length consistency: len() matches the number of pushes minus removals

#[cfg(kani)]
use indexed_binary_heap::{HeapOrderable, IndexedBinaryHeap, Prioritized, NOT_IN_HEAP};

#[cfg(kani)]
fn any_heap(n: usize) -> IndexedBinaryHeap<Prioritized<u8, u8>> {
    let mut heap = IndexedBinaryHeap::with_capacity(n);
    for id in 0..n {
        heap.push(Prioritized::new(kani::any(), id as u8));
    }
    heap
}

/// Proof: invariants hold after arbitrary pushes
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_invariants_after_push() {
    let heap = any_heap(4);
    assert_eq!(heap.len(), 4);
    assert!(heap.verify_invariants());
}

/// Proof: pop returns an element no smaller than any remaining one
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_pop_returns_maximum() {
    let mut heap = any_heap(4);
    let top = heap.pop().expect("pop() must succeed on a non-empty heap");

    assert_eq!(top.heap_index(), NOT_IN_HEAP);
    assert!(heap.iter().all(|e| e.priority <= top.priority));
    assert!(heap.verify_invariants());
}

/// Proof: removing any slot keeps the heap valid
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_remove_at_any_slot() {
    let mut heap = any_heap(4);
    let slot: usize = kani::any();
    kani::assume(slot < 4);

    let removed = heap.remove_at(slot);
    assert!(removed.is_some());
    assert_eq!(heap.len(), 3);
    assert!(heap.verify_invariants());
}

/// Proof: an arbitrary key change followed by update keeps the heap valid
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_modify_any_slot() {
    let mut heap = any_heap(4);
    let slot: usize = kani::any();
    kani::assume(slot < 4);
    let new_priority: u8 = kani::any();

    assert!(heap.modify(slot, |e| e.priority = new_priority));
    assert!(heap.verify_invariants());
}
