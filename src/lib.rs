//! Binary Min-Heap for Rust
//!
//! This crate provides a binary min-heap: a priority queue backed by a dense,
//! zero-indexed `Vec` in which every element is less than or equal to its
//! children. It is meant as a building block for schedulers, event queues
//! and graph searches.
//!
//! # Operations
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `peek_min`    | O(1)       |
//! | `len`         | O(1)       |
//! | `is_empty`    | O(1)       |
//!
//! Querying an empty heap is a normal outcome, reported as `None`.
//!
//! # Example
//!
//! ```rust
//! use binary_min_heap::BinaryMinHeap;
//!
//! let mut heap = BinaryMinHeap::new();
//! heap.insert(10);
//! heap.insert(20);
//! heap.insert(5);
//! heap.insert(30);
//!
//! assert_eq!(heap.peek_min(), Some(&5));
//! assert_eq!(heap.extract_min(), Some(5));
//! assert_eq!(heap.extract_min(), Some(10));
//! assert_eq!(heap.len(), 2);
//! ```
//!
//! The heap is not internally synchronized. Share it between threads by
//! wrapping the whole structure in a lock.

pub mod binary;
pub mod stdlib_compat;
pub mod traits;

pub use binary::BinaryMinHeap;
pub use stdlib_compat::{DrainSorted, IntoIter};
// Re-export the main trait for convenience
pub use traits::Heap;
