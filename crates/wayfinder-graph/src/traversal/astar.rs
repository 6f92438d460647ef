//! A* algorithm for goal-directed weighted shortest path finding.
//!
//! The search keeps at most one live heap entry per vertex and lowers its key
//! in place whenever a cheaper route is found, which is where the Fibonacci
//! heap's O(1) amortized decrease-key pays off.
//!
//! # Re-opening
//!
//! A vertex that was already dequeued is not treated as final. If a later
//! expansion finds a cheaper route to it, the vertex is enqueued again and
//! re-expanded. With a consistent heuristic this never happens; with an
//! admissible but inconsistent one it keeps the result optimal at the cost
//! of revisiting vertices.
//!
//! # Heuristics
//!
//! Any `Fn(&V, &V) -> f64` closure is a [`Heuristic`]. Built-ins:
//! - [`ZeroHeuristic`] - Always returns 0, making A* behave like Dijkstra
//! - [`ConstantHeuristic`] - Returns a constant value
//!
//! # Example
//!
//! ```
//! use wayfinder_graph::store::WeightedGraph;
//! use wayfinder_graph::traversal::AStar;
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_edge((0, 0), (1, 0), 1.0);
//! graph.add_edge((1, 0), (2, 0), 1.0);
//! graph.add_edge((0, 0), (2, 0), 3.0);
//!
//! let euclid = |a: &(i32, i32), b: &(i32, i32)| {
//!     f64::from(a.0 - b.0).hypot(f64::from(a.1 - b.1))
//! };
//! let path = AStar::new((0, 0), (2, 0))
//!     .with_heuristic(euclid)
//!     .find(&graph)?
//!     .expect("connected");
//! assert_eq!(path.distance(), 2.0);
//! # Ok::<(), wayfinder_graph::store::GraphError>(())
//! ```

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::WeightedPath;
use crate::heap::{FibonacciHeap, HeapHandle};
use crate::id_gen::EdgeId;
use crate::store::{GraphError, GraphResult, WeightedEdge, WeightedGraph};
use crate::Vertex;

/// A heuristic function for the A* algorithm.
///
/// The heuristic estimates the remaining cost from a vertex to the goal.
/// For optimal results it should be:
/// - **Admissible**: Never overestimate the actual cost
/// - **Consistent**: h(n) <= cost(n, n') + h(n')
///
/// Admissibility is required for the result to be a shortest path.
/// Consistency only avoids re-expanding vertices.
pub trait Heuristic<V> {
    /// Estimate the cost from `node` to `goal`.
    fn estimate(&self, node: &V, goal: &V) -> f64;
}

impl<V, F> Heuristic<V> for F
where
    F: Fn(&V, &V) -> f64,
{
    fn estimate(&self, node: &V, goal: &V) -> f64 {
        self(node, goal)
    }
}

/// Zero heuristic - always returns 0.
///
/// Using this heuristic makes A* behave exactly like Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<V> Heuristic<V> for ZeroHeuristic {
    fn estimate(&self, _node: &V, _goal: &V) -> f64 {
        0.0
    }
}

/// Constant heuristic - returns the same value everywhere except at the goal.
///
/// Admissible whenever the value is at most the cheapest edge weight.
#[derive(Debug, Clone, Copy)]
pub struct ConstantHeuristic(pub f64);

impl<V: PartialEq> Heuristic<V> for ConstantHeuristic {
    fn estimate(&self, node: &V, goal: &V) -> f64 {
        if node == goal {
            0.0
        } else {
            self.0
        }
    }
}

/// Heap payload: a vertex and the path cost it was queued with.
#[derive(Debug)]
struct SearchEntry<'g, V> {
    vertex: &'g V,
    cost: f64,
}

/// Best known route to a vertex.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    handle: HeapHandle,
    cost: f64,
}

/// State left behind by a search that reached the target.
struct Reached<'g, V> {
    predecessor: FxHashMap<&'g V, EdgeId>,
    cost: f64,
}

/// A* algorithm for goal-directed weighted shortest path finding.
///
/// # Type Parameters
///
/// * `V` - The vertex type
/// * `H` - The heuristic type implementing [`Heuristic`]
///
/// # Errors
///
/// Every query fails with [`GraphError::VertexNotFound`] if the source or
/// target is not in the graph, and with [`GraphError::InvalidWeight`] if the
/// search meets a negative or NaN edge weight. An unreachable target is not
/// an error.
#[derive(Debug, Clone)]
pub struct AStar<V, H = ZeroHeuristic> {
    /// Source vertex.
    source: V,
    /// Target (goal) vertex.
    target: V,
    /// Heuristic function.
    heuristic: H,
    /// Maximum path cost to search.
    max_cost: Option<f64>,
}

impl<V: Vertex> AStar<V, ZeroHeuristic> {
    /// Create a new A* pathfinder with the zero heuristic.
    ///
    /// This behaves like Dijkstra's algorithm. Use `with_heuristic()`
    /// to provide a domain-specific heuristic.
    pub fn new(source: V, target: V) -> Self {
        Self { source, target, heuristic: ZeroHeuristic, max_cost: None }
    }
}

impl<V: Vertex, H: Heuristic<V>> AStar<V, H> {
    /// Runs a single search from `source` to `target`.
    ///
    /// Shorthand for `AStar::new(source, target).with_heuristic(heuristic)
    /// .find(graph)`.
    pub fn perform(
        graph: &WeightedGraph<V>,
        source: V,
        target: V,
        heuristic: H,
    ) -> GraphResult<Option<WeightedPath<V>>> {
        AStar::new(source, target).with_heuristic(heuristic).find(graph)
    }

    /// Set the heuristic function.
    pub fn with_heuristic<H2: Heuristic<V>>(self, heuristic: H2) -> AStar<V, H2> {
        AStar { source: self.source, target: self.target, heuristic, max_cost: self.max_cost }
    }

    /// Set the maximum path cost to search.
    ///
    /// Routes whose cost exceeds this value are not considered.
    #[must_use]
    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    /// Find the shortest weighted path.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(WeightedPath))` if a path exists
    /// - `Ok(None)` if no path exists within the constraints
    /// - `Err(GraphError)` if an endpoint is missing or a bad weight is met
    pub fn find(&self, graph: &WeightedGraph<V>) -> GraphResult<Option<WeightedPath<V>>> {
        let Some(reached) = self.search(graph)? else {
            return Ok(None);
        };

        let mut edges: Vec<WeightedEdge<V>> = Vec::new();
        let mut current = &self.target;
        while *current != self.source {
            // Predecessor chains are acyclic, so a walk longer than the
            // vertex count means the map is corrupt.
            if edges.len() >= graph.vertex_count() {
                debug!("predecessor chain does not terminate");
                return Ok(None);
            }
            let step = reached
                .predecessor
                .get(current)
                .and_then(|&edge_id| graph.edge(edge_id))
                .and_then(|edge| edge.opposite(current).map(|previous| (edge, previous)));
            let Some((edge, previous)) = step else {
                debug!(vertex = ?current, "no predecessor edge during reconstruction");
                return Ok(None);
            };
            edges.push(edge.clone());
            current = previous;
        }
        edges.reverse();

        WeightedPath::new(self.source.clone(), self.target.clone(), edges).map(Some)
    }

    /// Find the shortest distance (total cost) to the target.
    ///
    /// Skips path reconstruction. Unlike the distance of the path returned by
    /// [`find`](Self::find), this is `0` when source and target coincide.
    pub fn distance(&self, graph: &WeightedGraph<V>) -> GraphResult<Option<f64>> {
        Ok(self.search(graph)?.map(|reached| reached.cost))
    }

    /// Check if a path exists within the cost constraints.
    pub fn exists(&self, graph: &WeightedGraph<V>) -> GraphResult<bool> {
        Ok(self.distance(graph)?.is_some())
    }

    fn search<'g>(&self, graph: &'g WeightedGraph<V>) -> GraphResult<Option<Reached<'g, V>>> {
        let source =
            graph.vertex(&self.source).ok_or_else(|| GraphError::vertex_not_found(&self.source))?;
        let target =
            graph.vertex(&self.target).ok_or_else(|| GraphError::vertex_not_found(&self.target))?;

        let mut heap = FibonacciHeap::new();
        let mut frontier: FxHashMap<&'g V, Frontier> = FxHashMap::default();
        let mut predecessor: FxHashMap<&'g V, EdgeId> = FxHashMap::default();
        let mut expanded = 0usize;
        let mut reopened = 0usize;

        let priority = self.heuristic.estimate(source, target);
        let handle = heap.enqueue(SearchEntry { vertex: source, cost: 0.0 }, priority)?;
        frontier.insert(source, Frontier { handle, cost: 0.0 });

        let mut reached = None;
        while let Some((SearchEntry { vertex, cost }, _)) = heap.dequeue_min() {
            if vertex == target {
                reached = Some(cost);
                break;
            }
            expanded += 1;

            for (edge_id, edge, adjacent) in graph.incident(vertex) {
                if edge.weight.is_nan() || edge.weight < 0.0 {
                    let edge_name = format!("{edge_id} ({:?} - {:?})", edge.source, edge.target);
                    warn!(edge = %edge_name, weight = edge.weight, "aborting search on invalid edge weight");
                    return Err(GraphError::InvalidWeight {
                        edge: edge_name,
                        message: format!(
                            "weight {} is not a non-negative number; A* requires non-negative weights",
                            edge.weight
                        ),
                    });
                }

                let tentative = cost + edge.weight;
                if self.max_cost.is_some_and(|max| tentative > max) {
                    continue;
                }

                match frontier.get_mut(adjacent) {
                    Some(best) if tentative >= best.cost => continue,
                    Some(best) => {
                        let priority = tentative + self.heuristic.estimate(adjacent, target);
                        if heap.contains(best.handle) {
                            heap.decrease_key(best.handle, priority)?;
                            heap.value_mut(best.handle)?.cost = tentative;
                        } else {
                            // Already expanded with a worse cost: open it again.
                            reopened += 1;
                            best.handle = heap
                                .enqueue(SearchEntry { vertex: adjacent, cost: tentative }, priority)?;
                        }
                        best.cost = tentative;
                    }
                    None => {
                        let priority = tentative + self.heuristic.estimate(adjacent, target);
                        let handle =
                            heap.enqueue(SearchEntry { vertex: adjacent, cost: tentative }, priority)?;
                        frontier.insert(adjacent, Frontier { handle, cost: tentative });
                    }
                }
                predecessor.insert(adjacent, edge_id);
            }
        }

        debug!(
            expanded,
            reopened,
            discovered = frontier.len(),
            found = reached.is_some(),
            "A* search finished"
        );
        Ok(reached.map(|cost| Reached { predecessor, cost }))
    }
}
