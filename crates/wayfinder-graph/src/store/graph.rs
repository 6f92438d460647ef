//! Undirected weighted graph.

use std::collections::HashMap;

use super::WeightedEdge;
use crate::id_gen::{EdgeId, IdGenerator};
use crate::Vertex;

/// An undirected graph with weighted edges.
///
/// Vertices are added lazily when an edge references them, or explicitly
/// through [`add_vertex`](Self::add_vertex). At most one edge joins any pair
/// of vertices; adding another replaces it.
///
/// # Invariants
///
/// For every adjacency entry `v1 -> v2 -> id` there is a matching
/// `v2 -> v1 -> id` entry, and `id` names a live edge record.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    /// Vertex -> neighbour -> edge record.
    adjacency: HashMap<V, HashMap<V, EdgeId>>,
    /// Edge records, shared by both adjacency directions.
    edges: HashMap<EdgeId, WeightedEdge<V>>,
    id_gen: IdGenerator,
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> WeightedGraph<V> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self { adjacency: HashMap::new(), edges: HashMap::new(), id_gen: IdGenerator::new() }
    }

    /// Create an empty graph with room for `vertices` vertices.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(vertices),
            edges: HashMap::with_capacity(vertices),
            id_gen: IdGenerator::new(),
        }
    }

    /// Adds an edge between `v1` and `v2` with the given weight.
    ///
    /// Missing endpoints are added to the graph. If the vertices are already
    /// connected, the old edge is removed and a new one takes its place in
    /// both adjacency slots.
    ///
    /// Returns `true` because a newly created edge is always inserted, even
    /// when it replaces a previous one.
    pub fn add_edge(&mut self, v1: V, v2: V, weight: f64) -> bool {
        self.add_edge_value(WeightedEdge::new(v1, v2, weight))
    }

    /// Adds a prebuilt edge, with the same semantics as
    /// [`add_edge`](Self::add_edge).
    pub fn add_edge_value(&mut self, edge: WeightedEdge<V>) -> bool {
        if let Some(old) = self.edge_id(&edge.source, &edge.target) {
            self.edges.remove(&old);
        }

        let id = self.id_gen.next_edge_id();
        self.adjacency.entry(edge.source.clone()).or_default().insert(edge.target.clone(), id);
        self.adjacency.entry(edge.target.clone()).or_default().insert(edge.source.clone(), id);
        self.edges.insert(id, edge);
        true
    }

    /// Adds a vertex. Adding a vertex that is already present is a no-op.
    ///
    /// Always returns `true`.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.adjacency.entry(vertex).or_default();
        true
    }

    /// Updates the weight of the edge joining `v1` and `v2` in place.
    ///
    /// Returns `false` if the vertices are not connected.
    pub fn set_weight(&mut self, v1: &V, v2: &V, weight: f64) -> bool {
        match self.edge_id(v1, v2).and_then(|id| self.edges.get_mut(&id)) {
            Some(edge) => {
                edge.weight = weight;
                true
            }
            None => false,
        }
    }

    /// Removes the edge joining `v1` and `v2`.
    ///
    /// Returns `false` if there is no such edge.
    pub fn remove_edge(&mut self, v1: &V, v2: &V) -> bool {
        match self.edge_id(v1, v2) {
            Some(id) => self.detach(id),
            None => false,
        }
    }

    /// Removes the edge equal (by value) to `edge`.
    ///
    /// Returns `false` if the graph holds no such edge.
    pub fn remove_edge_value(&mut self, edge: &WeightedEdge<V>) -> bool {
        self.contains_edge_value(edge) && self.remove_edge(&edge.source, &edge.target)
    }

    /// Removes a vertex together with every edge incident to it.
    ///
    /// Returns `false` if the vertex is absent.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(neighbours) = self.adjacency.get(vertex) else {
            return false;
        };
        let incident: Vec<EdgeId> = neighbours.values().copied().collect();
        for id in incident {
            self.detach(id);
        }
        self.adjacency.remove(vertex);
        true
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.edges.clear();
    }

    /// Returns true if an edge joins `v1` and `v2`.
    #[inline]
    pub fn contains_edge(&self, v1: &V, v2: &V) -> bool {
        self.edge_id(v1, v2).is_some()
    }

    /// Returns true if the graph holds an edge equal (by value) to `edge`.
    pub fn contains_edge_value(&self, edge: &WeightedEdge<V>) -> bool {
        self.find_edge(&edge.source, &edge.target).is_some_and(|found| found == edge)
    }

    /// Returns true if the vertex is part of the graph.
    #[inline]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns the graph's own copy of `vertex`, if present.
    #[inline]
    pub fn vertex(&self, vertex: &V) -> Option<&V> {
        self.adjacency.get_key_value(vertex).map(|(stored, _)| stored)
    }

    /// Finds the edge joining `v1` and `v2`.
    pub fn find_edge(&self, v1: &V, v2: &V) -> Option<&WeightedEdge<V>> {
        self.edge_id(v1, v2).and_then(|id| self.edges.get(&id))
    }

    /// Looks up an edge record by ID.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&WeightedEdge<V>> {
        self.edges.get(&id)
    }

    /// Returns the ID of the edge joining `v1` and `v2`.
    #[inline]
    pub fn edge_id(&self, v1: &V, v2: &V) -> Option<EdgeId> {
        self.adjacency.get(v1).and_then(|neighbours| neighbours.get(v2)).copied()
    }

    /// Iterates over the edges incident to `vertex`, paired with their IDs
    /// and the endpoint opposite `vertex`.
    ///
    /// Yields nothing for an absent vertex.
    pub fn incident<'a>(
        &'a self,
        vertex: &V,
    ) -> impl Iterator<Item = (EdgeId, &'a WeightedEdge<V>, &'a V)> + 'a {
        self.adjacency.get(vertex).into_iter().flat_map(move |neighbours| {
            neighbours
                .iter()
                .filter_map(move |(adjacent, id)| self.edges.get(id).map(|e| (*id, e, adjacent)))
        })
    }

    /// Returns the edges leaving `vertex`.
    ///
    /// The graph is undirected, so this is every edge incident to `vertex`.
    pub fn edges_from_source<'a>(
        &'a self,
        vertex: &V,
    ) -> impl Iterator<Item = &'a WeightedEdge<V>> + 'a {
        self.incident(vertex).map(|(_, edge, _)| edge)
    }

    /// Returns the edges arriving at `vertex`.
    ///
    /// The graph is undirected, so this is the same set as
    /// [`edges_from_source`](Self::edges_from_source).
    pub fn edges_to_target<'a>(
        &'a self,
        vertex: &V,
    ) -> impl Iterator<Item = &'a WeightedEdge<V>> + 'a {
        self.edges_from_source(vertex)
    }

    /// Returns the number of edges incident to `vertex`, or `None` if the
    /// vertex is absent.
    #[inline]
    pub fn out_degree(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get(vertex).map(HashMap::len)
    }

    /// Returns the number of edges incident to `vertex`, or `None` if the
    /// vertex is absent. Identical to [`out_degree`](Self::out_degree).
    #[inline]
    pub fn in_degree(&self, vertex: &V) -> Option<usize> {
        self.out_degree(vertex)
    }

    /// Iterates over all vertices.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Iterates over all edges.
    pub fn edges(&self) -> impl Iterator<Item = &WeightedEdge<V>> {
        self.edges.values()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Drops an edge record and both of its adjacency entries.
    fn detach(&mut self, id: EdgeId) -> bool {
        let Some(edge) = self.edges.remove(&id) else {
            return false;
        };
        if let Some(neighbours) = self.adjacency.get_mut(&edge.source) {
            neighbours.remove(&edge.target);
        }
        if let Some(neighbours) = self.adjacency.get_mut(&edge.target) {
            neighbours.remove(&edge.source);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> WeightedGraph<char> {
        let mut graph = WeightedGraph::new();
        graph.add_edge('a', 'b', 1.0);
        graph.add_edge('b', 'c', 2.0);
        graph.add_edge('c', 'a', 3.0);
        graph
    }

    #[test]
    fn add_edge_adds_vertices_lazily() {
        let graph = triangle();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains_vertex(&'a'));
        assert!(!graph.contains_vertex(&'z'));
    }

    #[test]
    fn adjacency_is_symmetric() {
        let graph = triangle();
        for edge in graph.edges() {
            let forward = graph.edge_id(&edge.source, &edge.target);
            let backward = graph.edge_id(&edge.target, &edge.source);
            assert!(forward.is_some());
            assert_eq!(forward, backward);
        }
    }

    #[test]
    fn replacing_an_edge_keeps_one_record() {
        let mut graph = triangle();
        assert!(graph.add_edge('b', 'a', 9.0));
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.find_edge(&'a', &'b').map(|e| e.weight), Some(9.0));
        assert_eq!(graph.find_edge(&'b', &'a').map(|e| e.weight), Some(9.0));
        assert!(!graph.contains_edge_value(&WeightedEdge::new('a', 'b', 1.0)));
    }

    #[test]
    fn set_weight_is_seen_from_both_endpoints() {
        let mut graph = triangle();
        assert!(graph.set_weight(&'c', &'b', 0.25));
        assert_eq!(graph.find_edge(&'b', &'c').map(|e| e.weight), Some(0.25));
        assert!(!graph.set_weight(&'a', &'z', 1.0));
    }

    #[test]
    fn remove_edge_clears_both_directions() {
        let mut graph = triangle();
        assert!(graph.remove_edge(&'b', &'a'));
        assert!(!graph.contains_edge(&'a', &'b'));
        assert!(!graph.contains_edge(&'b', &'a'));
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.remove_edge(&'a', &'b'));
    }

    #[test]
    fn remove_edge_by_value() {
        let mut graph = triangle();
        assert!(!graph.remove_edge_value(&WeightedEdge::new('a', 'b', 5.0)));
        assert!(graph.remove_edge_value(&WeightedEdge::new('b', 'a', 1.0)));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn remove_vertex_removes_incident_edges() {
        let mut graph = triangle();
        assert!(graph.remove_vertex(&'a'));
        assert!(!graph.contains_vertex(&'a'));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.out_degree(&'b'), Some(1));
        assert!(!graph.remove_vertex(&'a'));
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut graph = triangle();
        assert!(graph.add_vertex('a'));
        assert!(graph.add_vertex('d'));
        assert!(graph.add_vertex('d'));
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.out_degree(&'a'), Some(2));
        assert_eq!(graph.out_degree(&'d'), Some(0));
    }

    #[test]
    fn degree_of_absent_vertex_is_none() {
        let graph = triangle();
        assert_eq!(graph.out_degree(&'q'), None);
        assert_eq!(graph.in_degree(&'q'), None);
        assert_eq!(graph.in_degree(&'a'), Some(2));
    }

    #[test]
    fn edges_from_source_equals_edges_to_target() {
        let graph = triangle();
        let mut from: Vec<f64> = graph.edges_from_source(&'b').map(|e| e.weight).collect();
        let mut to: Vec<f64> = graph.edges_to_target(&'b').map(|e| e.weight).collect();
        from.sort_by(f64::total_cmp);
        to.sort_by(f64::total_cmp);
        assert_eq!(from, vec![1.0, 2.0]);
        assert_eq!(from, to);
    }

    #[test]
    fn incident_yields_opposite_endpoint() {
        let graph = triangle();
        let mut adjacent: Vec<char> = graph.incident(&'a').map(|(_, _, v)| *v).collect();
        adjacent.sort_unstable();
        assert_eq!(adjacent, vec!['b', 'c']);
        assert_eq!(graph.incident(&'z').count(), 0);
    }

    #[test]
    fn self_loop_is_stored_once() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(1, 1, 2.0);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.out_degree(&1), Some(1));
        assert!(graph.remove_vertex(&1));
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn clear_empties_everything() {
        let mut graph = triangle();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
