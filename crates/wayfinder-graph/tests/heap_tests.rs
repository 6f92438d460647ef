//! Integration tests for the Fibonacci heap as a standalone priority queue.

#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wayfinder_graph::heap::{FibonacciHeap, HeapError, HeapHandle};

#[test]
fn heap_sort_of_random_priorities() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut heap = FibonacciHeap::new();
    let mut priorities: Vec<f64> = (0..5_000).map(|_| rng.gen_range(-1e6..1e6)).collect();
    for (i, &p) in priorities.iter().enumerate() {
        heap.enqueue(i, p).unwrap();
    }

    priorities.sort_by(f64::total_cmp);
    let drained: Vec<f64> = std::iter::from_fn(|| heap.dequeue_min().map(|(_, p)| p)).collect();
    assert_eq!(drained, priorities);
}

#[test]
fn interleaved_operations_against_reference() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut heap = FibonacciHeap::new();
    let mut live: HashMap<u32, (HeapHandle, f64)> = HashMap::new();
    let mut next = 0u32;

    for _ in 0..20_000 {
        match rng.gen_range(0..10) {
            0..=3 => {
                let p = f64::from(rng.gen_range(0..1_000u32));
                let handle = heap.enqueue(next, p).unwrap();
                live.insert(next, (handle, p));
                next += 1;
            }
            4..=5 => {
                let expected = live.values().map(|&(_, p)| p).min_by(f64::total_cmp);
                let popped = heap.dequeue_min();
                assert_eq!(popped.as_ref().map(|&(_, p)| p), expected);
                if let Some((id, _)) = popped {
                    live.remove(&id);
                }
            }
            6..=8 => {
                if let Some((&id, &(handle, p))) = live.iter().next() {
                    let lower = p - f64::from(rng.gen_range(0..50u32));
                    heap.decrease_key(handle, lower).unwrap();
                    live.insert(id, (handle, lower));
                }
            }
            _ => {
                if let Some((&id, &(handle, p))) = live.iter().next() {
                    assert_eq!(heap.delete(handle), Ok((id, p)));
                    live.remove(&id);
                    assert_eq!(heap.delete(handle), Err(HeapError::StaleHandle));
                }
            }
        }
        assert_eq!(heap.len(), live.len());
    }
}

#[test]
fn decrease_key_keeps_entries_reachable() {
    let mut heap = FibonacciHeap::new();
    let handles: Vec<_> = (0..64).map(|i| heap.enqueue(i, f64::from(100 + i)).unwrap()).collect();
    heap.enqueue(-1, 0.0).unwrap();
    heap.dequeue_min();

    // Walk every entry down below all others, one at a time.
    for (i, &handle) in handles.iter().enumerate().rev() {
        heap.decrease_key(handle, -(i as f64) - 1.0).unwrap();
        assert_eq!(heap.priority(handle), Ok(-(i as f64) - 1.0));
        assert!(heap.peek_min().map(|(_, p)| p) <= Some(-(i as f64) - 1.0));
    }

    let order: Vec<i32> = std::iter::from_fn(|| heap.dequeue_min().map(|(v, _)| v)).collect();
    assert_eq!(order, (0..64).rev().collect::<Vec<_>>());
}

#[test]
fn failed_decrease_leaves_heap_untouched() {
    let mut heap = FibonacciHeap::new();
    let a = heap.enqueue("a", 3.0).unwrap();
    heap.enqueue("b", 5.0).unwrap();
    let before = heap.to_string();

    assert!(heap.decrease_key(a, 4.0).is_err());
    assert!(heap.decrease_key(a, f64::NAN).is_err());
    assert_eq!(heap.to_string(), before);
    assert_eq!(heap.len(), 2);
}

#[test]
fn error_messages() {
    assert_eq!(HeapError::NanPriority.to_string(), "priority cannot be NaN");
    assert_eq!(HeapError::ForeignHandle.to_string(), "handle belongs to another heap");
}
