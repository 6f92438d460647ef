//! Identifier types and ID generation.
//!
//! Edges are referenced by [`EdgeId`] inside a graph so that both adjacency
//! directions share one edge record. Heaps carry a process-wide [`HeapId`]
//! so handles can be checked against the heap that issued them.
//! Edge IDs come from a per-graph [`IdGenerator`]; heap IDs from
//! [`HeapId::next`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Identifier of an edge record within a single graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Create an edge ID from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Identifier of a heap instance, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapId(u64);

impl HeapId {
    /// Allocate the next process-wide heap ID.
    pub fn next() -> Self {
        static NEXT_HEAP_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_HEAP_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

/// A monotonic edge ID generator.
///
/// Each graph owns one. IDs start from 1 (0 is reserved for "no ID").
///
/// # Example
///
/// ```
/// use wayfinder_graph::id_gen::IdGenerator;
///
/// let gen = IdGenerator::new();
/// let id1 = gen.next_edge_id();
/// let id2 = gen.next_edge_id();
/// assert!(id1 < id2);
/// ```
#[derive(Debug)]
pub struct IdGenerator {
    /// The next edge ID to assign.
    next_edge_id: AtomicU64,
}

impl IdGenerator {
    /// Create a new ID generator starting from 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next_edge_id: AtomicU64::new(1) }
    }

    /// Generate the next edge ID.
    pub fn next_edge_id(&self) -> EdgeId {
        EdgeId(self.next_edge_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the current edge ID counter value (next ID to be assigned).
    #[must_use]
    pub fn current_edge_counter(&self) -> u64 {
        self.next_edge_id.load(Ordering::Relaxed)
    }
}

impl Clone for IdGenerator {
    fn clone(&self) -> Self {
        Self { next_edge_id: AtomicU64::new(self.next_edge_id.load(Ordering::Relaxed)) }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_ids_are_monotonic() {
        let gen = IdGenerator::new();
        let first = gen.next_edge_id();
        let second = gen.next_edge_id();
        assert_eq!(first, EdgeId::new(1));
        assert_eq!(second, EdgeId::new(2));
        assert_eq!(gen.current_edge_counter(), 3);
    }

    #[test]
    fn cloned_generator_continues_from_snapshot() {
        let gen = IdGenerator::new();
        gen.next_edge_id();
        let copy = gen.clone();
        assert_eq!(copy.next_edge_id(), EdgeId::new(2));
        assert_eq!(gen.next_edge_id(), EdgeId::new(2));
    }

    #[test]
    fn heap_ids_are_unique() {
        let a = HeapId::next();
        let b = HeapId::next();
        assert_ne!(a, b);
        assert!(a.as_u64() >= 1);
    }

    #[test]
    fn edge_id_display() {
        assert_eq!(EdgeId::new(42).to_string(), "e42");
    }
}
