//! Shortest routes across grid maps.

use tracing::debug;
use wayfinder_graph::store::WeightedGraph;
use wayfinder_graph::traversal::{AStar, Heuristic, WeightedPath};

use crate::{EuclideanHeuristic, GridConfig, GridMap, GridResult, Point};

/// A route from a map's start cell to its end cell.
#[derive(Debug, Clone)]
pub struct Route {
    map: GridMap,
    path: WeightedPath<Point>,
}

impl Route {
    /// The map the route was found on.
    pub fn map(&self) -> &GridMap {
        &self.map
    }

    /// The cells and moves of the route.
    pub fn path(&self) -> &WeightedPath<Point> {
        &self.path
    }

    /// Total move cost.
    pub fn distance(&self) -> f64 {
        self.path.distance()
    }
}

/// Finds shortest routes on ASCII maps.
///
/// # Example
///
/// ```
/// use wayfinder_grid::PathFinder;
///
/// let finder = PathFinder::default();
/// let marked = finder.mark_path("....\n.XS.\n....")?;
/// assert_eq!(marked, "....\n.**.\n....");
/// # Ok::<(), wayfinder_grid::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PathFinder {
    config: GridConfig,
    heuristic: EuclideanHeuristic,
}

impl Default for PathFinder {
    fn default() -> Self {
        let config = GridConfig::default();
        let heuristic = EuclideanHeuristic::new(config.heuristic_cache, config.heuristic_scale());
        Self { config, heuristic }
    }
}

impl PathFinder {
    /// Create a path finder after validating `config`.
    pub fn new(config: GridConfig) -> GridResult<Self> {
        config.validate()?;
        let heuristic = EuclideanHeuristic::new(config.heuristic_cache, config.heuristic_scale());
        Ok(Self { config, heuristic })
    }

    /// The active configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Parses a map using this finder's character roles.
    pub fn parse(&self, text: &str) -> GridResult<GridMap> {
        GridMap::parse(text, &self.config)
    }

    /// Finds the cheapest route from start to end on a parsed map.
    ///
    /// Returns `Ok(None)` if walls separate the two.
    pub fn route(&self, map: GridMap) -> GridResult<Option<Route>> {
        let graph = map.to_graph(&self.config);
        let path = self.search(&map, &graph)?;
        Ok(path.map(|path| Route { map, path }))
    }

    /// Finds the cheapest route from the map's start to its end over a
    /// movement graph the caller already built with
    /// [`GridMap::to_graph`].
    pub fn search(
        &self,
        map: &GridMap,
        graph: &WeightedGraph<Point>,
    ) -> GridResult<Option<WeightedPath<Point>>> {
        let heuristic = |a: &Point, b: &Point| self.heuristic.estimate(a, b);
        let path = AStar::new(map.start(), map.end()).with_heuristic(heuristic).find(graph)?;

        match &path {
            Some(path) => debug!(cells = path.vertices().len(), distance = path.distance(), "route found"),
            None => debug!(start = %map.start(), end = %map.end(), "no route"),
        }
        Ok(path)
    }

    /// Parses `text` and finds the shortest path from start to end.
    pub fn find_shortest_path(&self, text: &str) -> GridResult<Option<WeightedPath<Point>>> {
        let map = self.parse(text)?;
        Ok(self.route(map)?.map(|route| route.path))
    }

    /// Returns `text` with every cell of the shortest path, start and end
    /// included, replaced by the path marker.
    ///
    /// The map is returned unmarked if no path exists.
    pub fn mark_path(&self, text: &str) -> GridResult<String> {
        let map = self.parse(text)?;
        let marked = match self.route(map.clone())? {
            Some(route) => map.render(&self.config, route.path.vertices(), self.config.path),
            None => map.render(&self.config, std::iter::empty(), self.config.path),
        };
        Ok(marked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridError;

    #[test]
    fn rejects_invalid_config() {
        let config = GridConfig { wall: '.', ..GridConfig::default() };
        assert!(matches!(PathFinder::new(config), Err(GridError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_oversized_heuristic_cache() {
        let config = GridConfig { heuristic_cache: usize::MAX, ..GridConfig::default() };
        assert!(matches!(PathFinder::new(config), Err(GridError::InvalidConfig(_))));
    }

    #[test]
    fn search_reuses_prebuilt_graph() {
        let finder = PathFinder::default();
        let map = finder.parse("S...\n...X").unwrap();
        let mut graph = map.to_graph(finder.config());
        let edges = graph.edge_count();

        let path = finder.search(&map, &graph).unwrap().unwrap();
        assert_eq!(path.distance(), 3.5);
        assert_eq!(graph.edge_count(), edges);

        // Changes to the graph are seen by the next search.
        assert!(graph.remove_vertex(&Point::new(3, 1)));
        graph.add_vertex(Point::new(3, 1));
        assert!(finder.search(&map, &graph).unwrap().is_none());
    }

    #[test]
    fn walled_off_end_has_no_route() {
        let finder = PathFinder::default();
        let text = "S.B..\n..B.X\n..B..";
        assert!(finder.find_shortest_path(text).unwrap().is_none());
        assert_eq!(finder.mark_path(text).unwrap(), text);
    }

    #[test]
    fn custom_characters() {
        let config = GridConfig { wall: '#', start: 'A', end: 'Z', path: 'o', ..GridConfig::default() };
        let finder = PathFinder::new(config).unwrap();
        assert_eq!(finder.mark_path("A.Z\n###").unwrap(), "ooo\n###");
    }

    #[test]
    fn route_keeps_map() {
        let finder = PathFinder::default();
        let map = finder.parse("S..X").unwrap();
        let route = finder.route(map).unwrap().unwrap();
        assert_eq!(route.map().width(), 4);
        assert_eq!(route.distance(), 3.0);
        assert_eq!(route.path().source(), &Point::new(0, 0));
    }
}
