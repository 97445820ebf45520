//! Binary Min-Heap implementation
//!
//! An implicit binary tree laid out in a `Vec`: the children of the element
//! at index `i` live at `2i + 1` and `2i + 2`, and its parent at
//! `(i - 1) / 2`. Every element is less than or equal to its children, so
//! the minimum always sits at index 0.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `peek_min`    | O(1)       |
//! | `len`         | O(1)       |
//!
//! # Equal elements
//!
//! When both children of a node compare equal during sift-down, the left
//! child is promoted. Extraction order among equal elements is therefore
//! deterministic for a given operation sequence, but it is not insertion
//! order: the heap is not stable.
//!
//! # Example
//!
//! ```rust
//! use binary_min_heap::binary::BinaryMinHeap;
//!
//! let mut heap = BinaryMinHeap::new();
//! heap.insert(10);
//! heap.insert(50);
//! heap.insert(20);
//!
//! assert_eq!(heap.extract_min(), Some(10));
//! assert_eq!(heap.extract_min(), Some(20));
//! assert_eq!(heap.extract_min(), Some(50));
//! assert_eq!(heap.extract_min(), None);
//! ```

use crate::traits::Heap;

/// A binary min-heap
///
/// Elements are their own priority and are compared with [`Ord`]. The
/// smallest element is always returned first.
#[derive(Debug, Clone)]
pub struct BinaryMinHeap<T: Ord> {
    /// Heap-ordered storage; `data.len()` is the element count
    data: Vec<T>,
}

impl<T: Ord> BinaryMinHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for at least `capacity` elements
    /// before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Inserts an element and restores heap order by sifting it up
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the minimum element without removing it, or `None` if empty
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the minimum element, or `None` if empty
    pub fn extract_min(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        // swap_remove moves the last element into the root slot
        let min = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(min)
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] < self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// Ties between the two children go to the left child.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let mut smaller = left;
            if right < len && self.data[right] < self.data[left] {
                smaller = right;
            }

            if self.data[smaller] < self.data[index] {
                self.data.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }

    /// Checks the heap property over every parent/child pair
    #[cfg(test)]
    pub(crate) fn holds_heap_property(&self) -> bool {
        (1..self.data.len()).all(|child| self.data[(child - 1) / 2] <= self.data[child])
    }
}

impl<T: Ord> Heap<T> for BinaryMinHeap<T> {
    fn new() -> Self {
        BinaryMinHeap::new()
    }

    fn is_empty(&self) -> bool {
        BinaryMinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryMinHeap::len(self)
    }

    fn insert(&mut self, value: T) {
        BinaryMinHeap::insert(self, value)
    }

    fn peek_min(&self) -> Option<&T> {
        BinaryMinHeap::peek_min(self)
    }

    fn extract_min(&mut self) -> Option<T> {
        BinaryMinHeap::extract_min(self)
    }
}

impl<T: Ord> Default for BinaryMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
