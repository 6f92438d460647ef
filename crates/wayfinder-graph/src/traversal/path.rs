//! Weighted path results.

use serde::Serialize;

use crate::store::{GraphError, GraphResult, WeightedEdge};
use crate::Vertex;

/// A path through a weighted graph, from `source` to `target`.
///
/// Edges are stored in travel order. Because edges are undirected, each one
/// may list its endpoints in either order; [`vertices`](Self::vertices)
/// gives the resolved visiting order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedPath<V> {
    source: V,
    target: V,
    edges: Vec<WeightedEdge<V>>,
    vertices: Vec<V>,
    distance: f64,
}

impl<V: Vertex> WeightedPath<V> {
    /// Builds a path from an edge list in source-to-target order.
    ///
    /// An empty edge list gives a path with no vertices and an infinite
    /// distance, including when `source == target`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Internal`] if the edges do not form a walk from
    /// `source` to `target`.
    pub fn new(source: V, target: V, edges: Vec<WeightedEdge<V>>) -> GraphResult<Self> {
        if edges.is_empty() {
            return Ok(Self { source, target, edges, vertices: Vec::new(), distance: f64::INFINITY });
        }

        let mut vertices = Vec::with_capacity(edges.len() + 1);
        let mut current = &source;
        for edge in &edges {
            vertices.push(current.clone());
            current = edge.opposite(current).ok_or_else(|| {
                GraphError::Internal(format!(
                    "edge {:?} - {:?} does not continue the path at {current:?}",
                    edge.source, edge.target
                ))
            })?;
        }
        if *current != target {
            return Err(GraphError::Internal(format!(
                "path ends at {current:?} instead of {target:?}"
            )));
        }
        vertices.push(target.clone());

        let distance = edges.iter().map(|edge| edge.weight).sum();
        Ok(Self { source, target, edges, vertices, distance })
    }

    /// The first vertex of the path.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// The last vertex of the path.
    pub fn target(&self) -> &V {
        &self.target
    }

    /// The edges in travel order.
    pub fn edges(&self) -> &[WeightedEdge<V>] {
        &self.edges
    }

    /// The vertices in visiting order, both ends included.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Sum of the edge weights.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the path has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns true if the path visits `vertex`.
    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }
}
