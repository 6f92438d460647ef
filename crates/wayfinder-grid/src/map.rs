//! Parsed ASCII grid maps.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wayfinder_graph::store::WeightedGraph;

use crate::{GridConfig, GridError, GridResult};

/// A cell coordinate: `x` is the column, `y` the row, both from the top left.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Point {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The role of a single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Walkable.
    Open,
    /// Impassable.
    Wall,
    /// Walkable, where the route starts.
    Start,
    /// Walkable, where the route ends.
    End,
}

impl Cell {
    /// Returns true for every cell except walls.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// A rectangular map with exactly one start and one end cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    /// Row-major cells.
    cells: Vec<Cell>,
    start: Point,
    end: Point,
}

impl GridMap {
    /// Parses a map, one row per line.
    ///
    /// A trailing newline is ignored and `\r\n` line endings are accepted.
    ///
    /// # Errors
    ///
    /// Fails if the map is empty or not rectangular, contains a character
    /// with no role in `config`, or does not have exactly one start and one
    /// end marker.
    pub fn parse(text: &str, config: &GridConfig) -> GridResult<Self> {
        let rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::EmptyMap);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        let mut start = None;
        let mut end = None;
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow { row: y, expected: width, found: row.len() });
            }
            for (x, &ch) in row.iter().enumerate() {
                let at = Point::new(x, y);
                let cell = match ch {
                    c if c == config.open => Cell::Open,
                    c if c == config.wall => Cell::Wall,
                    c if c == config.start => {
                        place_marker(&mut start, at, "start")?;
                        Cell::Start
                    }
                    c if c == config.end => {
                        place_marker(&mut end, at, "end")?;
                        Cell::End
                    }
                    _ => return Err(GridError::InvalidChar { ch, at }),
                };
                cells.push(cell);
            }
        }

        let start = start.ok_or(GridError::MissingMarker { role: "start", ch: config.start })?;
        let end = end.ok_or(GridError::MissingMarker { role: "end", ch: config.end })?;
        Ok(Self { width, height: rows.len(), cells, start, end })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The start cell.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The end cell.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns the cell at `point`, or `None` outside the map.
    pub fn cell(&self, point: Point) -> Option<Cell> {
        if point.x < self.width && point.y < self.height {
            self.cells.get(point.y * self.width + point.x).copied()
        } else {
            None
        }
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_walkable()).count()
    }

    /// Number of walkable cells, start and end included.
    pub fn walkable_count(&self) -> usize {
        self.cells.len() - self.wall_count()
    }

    fn is_walkable(&self, x: usize, y: usize) -> bool {
        self.cell(Point::new(x, y)).is_some_and(Cell::is_walkable)
    }

    /// Builds the movement graph.
    ///
    /// Every walkable cell is a vertex. Each one is joined to its walkable
    /// left and upper neighbours at `straight_cost` and to its walkable
    /// upper-left and upper-right neighbours at `diagonal_cost`; since edges
    /// are undirected this covers all eight directions. Diagonal steps may
    /// pass between two walls that touch at a corner.
    pub fn to_graph(&self, config: &GridConfig) -> WeightedGraph<Point> {
        let mut graph = WeightedGraph::with_capacity(self.walkable_count());
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.is_walkable(x, y) {
                    continue;
                }
                let here = Point::new(x, y);
                graph.add_vertex(here);

                if y == 0 {
                    if x > 0 && self.is_walkable(x - 1, y) {
                        graph.add_edge(here, Point::new(x - 1, y), config.straight_cost);
                    }
                    continue;
                }
                if self.is_walkable(x + 1, y - 1) {
                    graph.add_edge(here, Point::new(x + 1, y - 1), config.diagonal_cost);
                }
                if x > 0 && self.is_walkable(x - 1, y - 1) {
                    graph.add_edge(here, Point::new(x - 1, y - 1), config.diagonal_cost);
                }
                if x > 0 && self.is_walkable(x - 1, y) {
                    graph.add_edge(here, Point::new(x - 1, y), config.straight_cost);
                }
                if self.is_walkable(x, y - 1) {
                    graph.add_edge(here, Point::new(x, y - 1), config.straight_cost);
                }
            }
        }

        debug!(
            width = self.width,
            height = self.height,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built grid graph"
        );
        graph
    }

    /// Renders the map with `marker` drawn over each of `points`.
    ///
    /// Rows are joined with `\n`, without a trailing newline. Points outside
    /// the map are ignored.
    pub fn render<'a>(
        &self,
        config: &GridConfig,
        points: impl IntoIterator<Item = &'a Point>,
        marker: char,
    ) -> String {
        let mut canvas: Vec<char> = self
            .cells
            .iter()
            .map(|cell| match cell {
                Cell::Open => config.open,
                Cell::Wall => config.wall,
                Cell::Start => config.start,
                Cell::End => config.end,
            })
            .collect();
        for point in points {
            if point.x < self.width && point.y < self.height {
                canvas[point.y * self.width + point.x] = marker;
            }
        }

        let mut out = String::with_capacity(canvas.len() + self.height);
        for (y, row) in canvas.chunks(self.width).enumerate() {
            if y > 0 {
                out.push('\n');
            }
            out.extend(row);
        }
        out
    }
}

fn place_marker(slot: &mut Option<Point>, at: Point, role: &'static str) -> GridResult<()> {
    match slot {
        Some(first) => Err(GridError::DuplicateMarker { role, first: *first, second: at }),
        None => {
            *slot = Some(at);
            Ok(())
        }
    }
}
