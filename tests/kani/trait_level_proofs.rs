//! Trait-level proofs for the Heap interface
//!
//! These proofs check the `Heap` contract over symbolic inputs rather than
//! storage details.

#[cfg(kani)]
use binary_min_heap::binary::BinaryMinHeap;
#[cfg(kani)]
use binary_min_heap::Heap;

/// Proof: is_empty() is consistent with len() == 0
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_is_empty_consistent() {
    let heap: BinaryMinHeap<u32> = BinaryMinHeap::new();
    assert!(heap.is_empty() == (heap.len() == 0));

    let mut heap: BinaryMinHeap<u32> = BinaryMinHeap::new();
    heap.insert(kani::any());
    assert!(!heap.is_empty());
    assert!(heap.len() > 0);
}

/// Proof: insert always increments length by exactly 1
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_insert_increments_len() {
    let mut heap: BinaryMinHeap<u32> = BinaryMinHeap::new();
    let count: usize = kani::any();
    kani::assume(count <= 4);

    for _ in 0..count {
        heap.insert(kani::any());
    }

    let before = heap.len();
    heap.insert(kani::any());
    assert!(heap.len() == before + 1);
}

/// Proof: peek_min returns the smallest of three symbolic inserts
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_peek_is_minimum() {
    let mut heap: BinaryMinHeap<u32> = BinaryMinHeap::new();

    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();
    heap.insert(a);
    heap.insert(b);
    heap.insert(c);

    let expected = a.min(b).min(c);
    assert!(heap.peek_min() == Some(&expected));
    assert!(heap.len() == 3);
}

/// Proof: extract_min yields values in non-decreasing order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_extract_order() {
    let mut heap: BinaryMinHeap<u32> = BinaryMinHeap::new();

    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();
    let d: u32 = kani::any();
    heap.insert(a);
    heap.insert(b);
    heap.insert(c);
    heap.insert(d);

    let mut last = 0u32;
    for _ in 0..4 {
        let v = heap
            .extract_min()
            .expect("extract_min() must succeed while elements remain");
        assert!(v >= last);
        last = v;
    }
    assert!(heap.extract_min().is_none());
}

/// Proof: extract_min decrements length by exactly 1 on a non-empty heap
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_extract_decrements_len() {
    let mut heap: BinaryMinHeap<u32> = Heap::new();
    heap.insert(kani::any());
    heap.insert(kani::any());

    let before = heap.len();
    assert!(heap.extract_min().is_some());
    assert!(heap.len() == before - 1);
}
