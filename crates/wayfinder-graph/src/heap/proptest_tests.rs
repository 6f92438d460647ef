//! Property-based tests for heap ordering and bookkeeping.

#![allow(clippy::expect_used, clippy::float_cmp)]

use proptest::prelude::*;

use super::{FibonacciHeap, HeapError, HeapHandle};

/// A single heap operation. Indices pick among handles issued so far.
#[derive(Debug, Clone)]
enum Op {
    Enqueue(f64),
    DequeueMin,
    DecreaseKey(usize, f64),
    Delete(usize),
}

fn arb_priority() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => (-1000i32..1000).prop_map(f64::from),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => arb_priority().prop_map(Op::Enqueue),
        2 => Just(Op::DequeueMin),
        3 => (any::<usize>(), arb_priority()).prop_map(|(i, p)| Op::DecreaseKey(i, p)),
        1 => any::<usize>().prop_map(Op::Delete),
    ]
}

/// Minimum over a reference model of live entries.
fn model_min(model: &[(usize, f64)]) -> Option<f64> {
    model.iter().map(|&(_, p)| p).min_by(f64::total_cmp)
}

proptest! {
    #[test]
    fn dequeue_is_sorted(priorities in prop::collection::vec(arb_priority(), 0..300)) {
        let mut heap = FibonacciHeap::new();
        for (i, &p) in priorities.iter().enumerate() {
            heap.enqueue(i, p).expect("priority is not NaN");
        }
        prop_assert_eq!(heap.len(), priorities.len());

        let mut sorted = priorities.clone();
        sorted.sort_by(f64::total_cmp);

        let mut drained = Vec::new();
        while let Some((i, p)) = heap.dequeue_min() {
            prop_assert_eq!(priorities[i], p);
            drained.push(p);
            heap.assert_invariants();
            heap.assert_distinct_root_ranks();
        }
        prop_assert_eq!(drained, sorted);
        prop_assert!(heap.is_empty());
    }

    #[test]
    fn operations_match_model(ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut heap = FibonacciHeap::new();
        let mut handles: Vec<HeapHandle> = Vec::new();
        // (handle index, priority) of live entries.
        let mut model: Vec<(usize, f64)> = Vec::new();

        for op in ops {
            match op {
                Op::Enqueue(p) => {
                    let handle = heap.enqueue(handles.len(), p).expect("priority is not NaN");
                    model.push((handles.len(), p));
                    handles.push(handle);
                }
                Op::DequeueMin => {
                    let expected = model_min(&model);
                    match heap.dequeue_min() {
                        Some((id, p)) => {
                            prop_assert_eq!(Some(p), expected);
                            let position = model.iter().position(|&(m, _)| m == id)
                                .expect("dequeued entry is live");
                            prop_assert_eq!(model[position].1, p);
                            model.swap_remove(position);
                            prop_assert!(!heap.contains(handles[id]));
                        }
                        None => prop_assert!(expected.is_none()),
                    }
                }
                Op::DecreaseKey(pick, p) if !handles.is_empty() => {
                    let id = pick % handles.len();
                    let live = model.iter().position(|&(m, _)| m == id);
                    let result = heap.decrease_key(handles[id], p);
                    match live {
                        None => prop_assert_eq!(result, Err(HeapError::StaleHandle)),
                        Some(position) => {
                            let current = model[position].1;
                            if p > current {
                                prop_assert_eq!(
                                    result,
                                    Err(HeapError::PriorityIncrease { current, requested: p })
                                );
                            } else {
                                prop_assert_eq!(result, Ok(()));
                                model[position].1 = p;
                            }
                        }
                    }
                }
                Op::Delete(pick) if !handles.is_empty() => {
                    let id = pick % handles.len();
                    let live = model.iter().position(|&(m, _)| m == id);
                    let result = heap.delete(handles[id]);
                    match live {
                        None => prop_assert_eq!(result, Err(HeapError::StaleHandle)),
                        Some(position) => {
                            let (_, p) = model.swap_remove(position);
                            prop_assert_eq!(result, Ok((id, p)));
                        }
                    }
                }
                Op::DecreaseKey(..) | Op::Delete(_) => {}
            }

            heap.assert_invariants();
            prop_assert_eq!(heap.len(), model.len());
            prop_assert_eq!(heap.peek_min().map(|(_, p)| p), model_min(&model));
        }
    }

    #[test]
    fn merge_preserves_entries(
        left in prop::collection::vec(arb_priority(), 0..100),
        right in prop::collection::vec(arb_priority(), 0..100),
    ) {
        let mut first = FibonacciHeap::new();
        let mut second = FibonacciHeap::new();
        for &p in &left {
            first.enqueue(p, p).expect("priority is not NaN");
        }
        for &p in &right {
            second.enqueue(p, p).expect("priority is not NaN");
        }
        // Give the second heap some structure before merging.
        if second.dequeue_min().is_some() {
            second.assert_invariants();
        }
        let right_len = second.len();

        first.merge(second);
        first.assert_invariants();
        prop_assert_eq!(first.len(), left.len() + right_len);

        let mut previous = f64::NEG_INFINITY;
        while let Some((value, p)) = first.dequeue_min() {
            prop_assert_eq!(value, p);
            prop_assert!(previous <= p);
            previous = p;
        }
    }
}
