//! Fibonacci heap priority queue.
//!
//! A mergeable min-priority queue after Fredman and Tarjan (1984), with
//! O(1) amortized [`enqueue`](FibonacciHeap::enqueue) and
//! [`decrease_key`](FibonacciHeap::decrease_key) and O(log n) amortized
//! [`dequeue_min`](FibonacciHeap::dequeue_min) and
//! [`delete`](FibonacciHeap::delete).
//!
//! # Storage
//!
//! Nodes live in a slot arena and link to each other by index. Each slot
//! carries a generation that is bumped when its entry leaves the heap, and
//! every [`HeapHandle`] records the heap that issued it together with the
//! generation it was issued for. A handle is therefore rejected once its
//! entry is gone, even if the slot has been reused, and a handle from one
//! heap is never accepted by another.
//!
//! # Example
//!
//! ```
//! use wayfinder_graph::heap::FibonacciHeap;
//!
//! let mut heap = FibonacciHeap::new();
//! let far = heap.enqueue("far", 10.0)?;
//! heap.enqueue("near", 3.0)?;
//!
//! heap.decrease_key(far, 1.0)?;
//! assert_eq!(heap.dequeue_min(), Some(("far", 1.0)));
//! assert_eq!(heap.dequeue_min(), Some(("near", 3.0)));
//! assert!(heap.is_empty());
//! # Ok::<(), wayfinder_graph::heap::HeapError>(())
//! ```

mod error;
mod fibonacci;
#[cfg(test)]
mod proptest_tests;

pub use error::{HeapError, HeapResult};
pub use fibonacci::{FibonacciHeap, HeapHandle};
