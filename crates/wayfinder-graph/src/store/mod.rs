//! Undirected weighted graph storage.
//!
//! This module provides an in-memory adjacency store for undirected graphs
//! whose edges carry a mutable `f64` weight.
//!
//! # Overview
//!
//! - [`WeightedGraph`] - Vertex set, adjacency lookup and edge records
//! - [`WeightedEdge`] - An undirected edge with a weight
//! - [`GraphError`] - Errors raised by graph consumers such as search
//!
//! # Layout
//!
//! Each edge record is stored once and referenced from both adjacency
//! directions by its [`EdgeId`](crate::id_gen::EdgeId), so an in-place
//! weight update is seen from either endpoint.
//!
//! # Example
//!
//! ```
//! use wayfinder_graph::store::WeightedGraph;
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_edge((0, 0), (1, 0), 1.0);
//! graph.add_edge((1, 0), (1, 1), 1.0);
//!
//! assert!(graph.contains_edge(&(1, 0), &(0, 0)));
//! assert_eq!(graph.out_degree(&(1, 0)), Some(2));
//! assert_eq!(graph.out_degree(&(5, 5)), None);
//! ```

mod edge;
mod error;
mod graph;

pub use edge::WeightedEdge;
pub use error::{GraphError, GraphResult};
pub use graph::WeightedGraph;
