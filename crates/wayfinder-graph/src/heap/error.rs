//! Error types for heap operations.

use thiserror::Error;

/// Errors that can occur in heap operations.
///
/// A rejected operation leaves the heap unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeapError {
    /// A priority was NaN.
    #[error("priority cannot be NaN")]
    NanPriority,

    /// `decrease_key` was asked to raise a priority.
    #[error("new priority ({requested}) cannot exceed current priority ({current})")]
    PriorityIncrease {
        /// The entry's current priority.
        current: f64,
        /// The rejected priority.
        requested: f64,
    },

    /// The handle was issued by a different heap.
    #[error("handle belongs to another heap")]
    ForeignHandle,

    /// The handle's entry was already dequeued or deleted.
    #[error("handle refers to an entry that was already dequeued or deleted")]
    StaleHandle,
}

/// Result type for heap operations.
pub type HeapResult<T> = Result<T, HeapError>;
