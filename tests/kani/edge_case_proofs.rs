//! Edge case proofs for bug finding
//!
//! These proofs target specific edge cases:
//! - Out-of-range indices leave the heap untouched
//! - Empty heap edge cases
//! - Equal keys

#[cfg(kani)]
use indexed_binary_heap::{IndexedBinaryHeap, Prioritized};

/// Proof: remove_at and update past the end are no-ops
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_out_of_range_is_noop() {
    let mut heap = IndexedBinaryHeap::new();
    heap.push(Prioritized::new(kani::any::<u8>(), 0u8));
    heap.push(Prioritized::new(kani::any::<u8>(), 1u8));
    heap.push(Prioritized::new(kani::any::<u8>(), 2u8));

    let index: usize = kani::any();
    kani::assume(index >= 3);
    let before: [u8; 3] = [heap.as_slice()[0].value, heap.as_slice()[1].value, heap.as_slice()[2].value];

    assert!(heap.remove_at(index).is_none());
    heap.update(index);

    let after: [u8; 3] = [heap.as_slice()[0].value, heap.as_slice()[1].value, heap.as_slice()[2].value];
    assert_eq!(before, after);
}

/// Proof: peek and pop on an empty heap return None
#[cfg(kani)]
#[kani::proof]
fn verify_empty_heap() {
    let mut heap: IndexedBinaryHeap<Prioritized<u8, u8>> = IndexedBinaryHeap::new();
    assert!(heap.peek().is_none());
    assert!(heap.pop().is_none());
    assert!(heap.pop_and_clear().is_none());
}

/// Proof: equal keys all come out and leave an empty heap
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_equal_keys_drain() {
    let key: u8 = kani::any();
    let mut heap = IndexedBinaryHeap::new();
    heap.push(Prioritized::new(key, 0u8));
    heap.push(Prioritized::new(key, 1u8));
    heap.push(Prioritized::new(key, 2u8));

    assert!(heap.pop().is_some());
    assert!(heap.pop().is_some());
    assert!(heap.pop().is_some());
    assert!(heap.is_empty());
}
