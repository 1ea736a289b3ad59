//! Kani proof harnesses
//!
//! - `heap_proofs.rs`: heap order and index coherence after each operation
//! - `edge_case_proofs.rs`: out-of-range indices, empty heaps, equal keys

#[cfg(kani)]
#[path = "edge_case_proofs.rs"]
mod edge_case_proofs;
#[cfg(kani)]
#[path = "heap_proofs.rs"]
mod heap_proofs;
