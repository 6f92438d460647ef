//! Error types for graph operations.

use thiserror::Error;

use crate::heap::HeapError;

/// Errors that can occur in graph operations and searches.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex required by the operation is not part of the graph.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// An edge weight the operation cannot handle was encountered.
    #[error("invalid edge weight on edge {edge}: {message}")]
    InvalidWeight {
        /// The offending edge, formatted for display.
        edge: String,
        /// Description of the weight issue.
        message: String,
    },

    /// The priority queue rejected an operation.
    #[error("heap error: {0}")]
    Heap(#[from] HeapError),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GraphError {
    /// Creates a vertex-not-found error from any debuggable vertex.
    #[must_use]
    pub fn vertex_not_found(vertex: &impl std::fmt::Debug) -> Self {
        Self::VertexNotFound(format!("{vertex:?}"))
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GraphError::vertex_not_found(&(3, 4));
        assert_eq!(err.to_string(), "vertex not found: (3, 4)");

        let err = GraphError::InvalidWeight { edge: "a-b".into(), message: "negative".into() };
        assert!(err.to_string().contains("a-b"));
    }

    #[test]
    fn from_heap_error() {
        let graph_err: GraphError = HeapError::NanPriority.into();
        assert!(matches!(graph_err, GraphError::Heap(HeapError::NanPriority)));
    }
}
