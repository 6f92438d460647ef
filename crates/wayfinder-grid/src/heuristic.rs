//! Euclidean distance heuristic with a precomputed lookup table.

use wayfinder_graph::traversal::Heuristic;

use crate::config::MAX_HEURISTIC_CACHE;
use crate::Point;

/// Straight-line distance between cells, scaled to stay admissible.
///
/// Distances for offsets below `size` in both axes come from a
/// `size * size` table built up front; larger offsets fall back to
/// [`f64::hypot`].
#[derive(Debug, Clone)]
pub struct EuclideanHeuristic {
    size: usize,
    /// `table[dx * size + dy]`, already scaled.
    table: Vec<f64>,
    scale: f64,
}

impl EuclideanHeuristic {
    /// Builds the table for offsets up to `size - 1`.
    ///
    /// `size` is clamped to [`MAX_HEURISTIC_CACHE`](crate::MAX_HEURISTIC_CACHE).
    pub fn new(size: usize, scale: f64) -> Self {
        let size = size.min(MAX_HEURISTIC_CACHE);
        let mut table = Vec::with_capacity(size * size);
        for dx in 0..size {
            for dy in 0..size {
                table.push((dx as f64).hypot(dy as f64) * scale);
            }
        }
        Self { size, table, scale }
    }

    /// Side length of the lookup table.
    pub fn cache_size(&self) -> usize {
        self.size
    }

    /// Scaled distance between two cells.
    pub fn distance(&self, a: &Point, b: &Point) -> f64 {
        let dx = a.x.abs_diff(b.x);
        let dy = a.y.abs_diff(b.y);
        if dx < self.size && dy < self.size {
            self.table[dx * self.size + dy]
        } else {
            (dx as f64).hypot(dy as f64) * self.scale
        }
    }
}

impl Heuristic<Point> for EuclideanHeuristic {
    fn estimate(&self, node: &Point, goal: &Point) -> f64 {
        self.distance(node, goal)
    }
}
