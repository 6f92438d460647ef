//! Weighted edge type.

use serde::{Deserialize, Serialize};

/// An undirected edge between two vertices, carrying a weight.
///
/// `source` and `target` record the order the edge was created in, but the
/// edge connects them symmetrically. Equality is value based and ignores
/// endpoint order: `(a, b, w)` equals `(b, a, w)`.
///
/// # Example
///
/// ```
/// use wayfinder_graph::store::WeightedEdge;
///
/// let edge = WeightedEdge::new("a", "b", 2.5);
/// assert_eq!(edge.opposite(&"a"), Some(&"b"));
/// assert_eq!(edge, WeightedEdge::new("b", "a", 2.5));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedEdge<V> {
    /// The endpoint the edge was created from.
    pub source: V,
    /// The endpoint the edge was created to.
    pub target: V,
    /// The weight of the edge.
    pub weight: f64,
}

impl<V> WeightedEdge<V> {
    /// Create a new weighted edge.
    #[must_use]
    pub const fn new(source: V, target: V, weight: f64) -> Self {
        Self { source, target, weight }
    }
}

impl<V: PartialEq> WeightedEdge<V> {
    /// Returns the endpoint opposite `vertex`, or `None` if `vertex` is not
    /// an endpoint of this edge.
    ///
    /// For a self-loop the opposite of the single endpoint is itself.
    pub fn opposite(&self, vertex: &V) -> Option<&V> {
        if self.source == *vertex {
            Some(&self.target)
        } else if self.target == *vertex {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Returns true if `vertex` is one of the endpoints.
    #[inline]
    pub fn is_incident(&self, vertex: &V) -> bool {
        self.source == *vertex || self.target == *vertex
    }

    /// Returns true if this edge joins `v1` and `v2`, in either order.
    pub fn connects(&self, v1: &V, v2: &V) -> bool {
        (self.source == *v1 && self.target == *v2) || (self.source == *v2 && self.target == *v1)
    }
}

impl<V: PartialEq> PartialEq for WeightedEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.connects(&other.source, &other.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_resolves_either_direction() {
        let edge = WeightedEdge::new(1, 2, 1.0);
        assert_eq!(edge.opposite(&1), Some(&2));
        assert_eq!(edge.opposite(&2), Some(&1));
        assert_eq!(edge.opposite(&3), None);
    }

    #[test]
    fn self_loop_opposite_is_itself() {
        let edge = WeightedEdge::new(7, 7, 0.5);
        assert_eq!(edge.opposite(&7), Some(&7));
    }

    #[test]
    fn equality_is_undirected_and_weighted() {
        let edge = WeightedEdge::new('a', 'b', 1.5);
        assert_eq!(edge, WeightedEdge::new('b', 'a', 1.5));
        assert_ne!(edge, WeightedEdge::new('a', 'b', 2.0));
        assert_ne!(edge, WeightedEdge::new('a', 'c', 1.5));
    }

    #[test]
    fn incidence() {
        let edge = WeightedEdge::new("x", "y", 3.0);
        assert!(edge.is_incident(&"x"));
        assert!(edge.is_incident(&"y"));
        assert!(!edge.is_incident(&"z"));
        assert!(edge.connects(&"y", &"x"));
    }
}
