//! Common trait for min-heap data structures
//!
//! [`Heap`] captures the priority-queue contract shared by every heap in this
//! crate: insertion, minimum lookup, minimum extraction, and size queries.
//! Writing tests and benchmarks against the trait keeps them independent of
//! the concrete storage layout.
//!
//! Unlike `std::collections::BinaryHeap`, which is a max-heap, heaps
//! implementing this trait always surface the *smallest* element first.
//! The element itself is its own priority, ordered by [`Ord`].

/// Base trait for min-heap/priority queue data structures
///
/// Empty-heap queries are not errors: [`peek_min`](Heap::peek_min) and
/// [`extract_min`](Heap::extract_min) return `None` when there is nothing to
/// return, and never panic.
///
/// # Example
///
/// ```rust
/// use binary_min_heap::Heap;
/// use binary_min_heap::binary::BinaryMinHeap;
///
/// let mut heap: BinaryMinHeap<i32> = Heap::new();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.peek_min(), Some(&1));
/// assert_eq!(heap.extract_min(), Some(1));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element, duplicates included
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, value: T);

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_min(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_min(&mut self) -> Option<T>;
}
