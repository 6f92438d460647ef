//! `Wayfinder` Graph
//!
//! This crate provides weighted graph storage, an amortized priority queue
//! and goal-directed shortest path search.
//!
//! # Modules
//!
//! - [`store`] - Undirected weighted graph storage
//! - [`heap`] - Fibonacci heap with O(1) amortized decrease-key
//! - [`traversal`] - A* search and weighted path reconstruction
//!
//! # Example
//!
//! ```
//! use wayfinder_graph::store::WeightedGraph;
//! use wayfinder_graph::traversal::AStar;
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_edge("a", "b", 1.0);
//! graph.add_edge("b", "c", 2.0);
//! graph.add_edge("a", "c", 5.0);
//!
//! let path = AStar::new("a", "c").find(&graph).unwrap().unwrap();
//! assert_eq!(path.vertices(), &["a", "b", "c"]);
//! assert_eq!(path.distance(), 3.0);
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod heap;
pub mod id_gen;
pub mod store;
pub mod traversal;

use std::fmt::Debug;
use std::hash::Hash;

/// A value usable as a graph vertex.
///
/// Vertices are opaque to the graph: only equality, a stable hash and
/// cheap cloning are required. Any type meeting the bounds implements this
/// trait automatically.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}
