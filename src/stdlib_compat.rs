//! Standard library compatibility layer
//!
//! Implements the std collection traits for [`BinaryMinHeap`] so it can be
//! built with `collect()`, grown with `extend()`, and consumed in a `for`
//! loop like the `std::collections` types.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: This is a min-heap, while `BinaryHeap` is a max-heap.
//! - **Iteration order**: Iterating a `BinaryMinHeap` by value yields elements
//!   in extraction (ascending) order. There is no arbitrary-order iterator.
//!
//! # Example
//!
//! ```rust
//! use binary_min_heap::BinaryMinHeap;
//!
//! let mut heap: BinaryMinHeap<i32> = [30, 10, 50].into_iter().collect();
//! heap.extend([20, 5]);
//!
//! assert_eq!(heap.peek_min(), Some(&5));
//! assert_eq!(heap.into_sorted_vec(), vec![5, 10, 20, 30, 50]);
//! ```

use std::iter::FusedIterator;

use crate::binary::BinaryMinHeap;

impl<T: Ord> BinaryMinHeap<T> {
    /// Consumes the heap and returns its elements in ascending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Returns an iterator that extracts elements in ascending order
    ///
    /// Dropping the iterator early discards whatever was not yet yielded,
    /// leaving the heap empty.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { heap: self }
    }
}

impl<T: Ord> FromIterator<T> for BinaryMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = BinaryMinHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> Extend<T> for BinaryMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> From<Vec<T>> for BinaryMinHeap<T> {
    fn from(values: Vec<T>) -> Self {
        let mut heap = BinaryMinHeap::with_capacity(values.len());
        heap.extend(values);
        heap
    }
}

/// Owning iterator over a [`BinaryMinHeap`] in extraction order
#[derive(Debug, Clone)]
pub struct IntoIter<T: Ord> {
    heap: BinaryMinHeap<T>,
}

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<T: Ord> IntoIterator for BinaryMinHeap<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { heap: self }
    }
}

/// Borrowing iterator returned by [`BinaryMinHeap::drain_sorted`]
#[derive(Debug)]
pub struct DrainSorted<'a, T: Ord> {
    heap: &'a mut BinaryMinHeap<T>,
}

impl<T: Ord> Iterator for DrainSorted<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: Ord> ExactSizeIterator for DrainSorted<'_, T> {}

impl<T: Ord> FusedIterator for DrainSorted<'_, T> {}

impl<T: Ord> Drop for DrainSorted<'_, T> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}
