//! Shortest path search over weighted graphs.
//!
//! - [`AStar`] - Goal-directed search driven by a [`Heuristic`]
//! - [`WeightedPath`] - The resulting vertex and edge sequence with its
//!   total distance
//!
//! # Example
//!
//! ```
//! use wayfinder_graph::store::WeightedGraph;
//! use wayfinder_graph::traversal::{AStar, ZeroHeuristic};
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_edge(1, 2, 1.0);
//! graph.add_edge(3, 4, 1.0);
//!
//! // Disconnected components yield no path rather than an error.
//! assert!(AStar::perform(&graph, 1, 4, ZeroHeuristic)?.is_none());
//!
//! // Unknown vertices are an error.
//! assert!(AStar::perform(&graph, 1, 99, ZeroHeuristic).is_err());
//! # Ok::<(), wayfinder_graph::store::GraphError>(())
//! ```

mod astar;
mod path;

pub use astar::{AStar, ConstantHeuristic, Heuristic, ZeroHeuristic};
pub use path::WeightedPath;
