//! Inspect command implementation.

use std::path::Path;

use serde::Serialize;
use wayfinder_grid::{PathFinder, Point};

use crate::commands::read_map;
use crate::error::Result;
use crate::output::{format_distance, format_info_table, InfoRow};
use crate::OutputFormat;

/// Summary of a parsed map and its movement graph.
#[derive(Debug, Serialize)]
struct MapStats {
    width: usize,
    height: usize,
    start: Point,
    end: Point,
    walls: usize,
    walkable: usize,
    edges: usize,
    distance: Option<f64>,
}

/// Inspect the map at `path` and print its statistics.
pub fn run(finder: &PathFinder, path: &Path, format: OutputFormat) -> Result<()> {
    let text = read_map(path)?;
    println!("{}", render(finder, &text, format)?);
    Ok(())
}

/// Collect statistics for `text` as a table or JSON object.
pub fn render(finder: &PathFinder, text: &str, format: OutputFormat) -> Result<String> {
    let map = finder.parse(text)?;
    let graph = map.to_graph(finder.config());
    let distance = finder.search(&map, &graph)?.map(|path| path.distance());
    let stats = MapStats {
        width: map.width(),
        height: map.height(),
        start: map.start(),
        end: map.end(),
        walls: map.wall_count(),
        walkable: map.walkable_count(),
        edges: graph.edge_count(),
        distance,
    };

    match format {
        OutputFormat::Text => {
            let rows = vec![
                InfoRow::new("Size", format!("{} x {}", stats.width, stats.height)),
                InfoRow::new("Start", stats.start),
                InfoRow::new("End", stats.end),
                InfoRow::new("Walls", stats.walls),
                InfoRow::new("Walkable Cells", stats.walkable),
                InfoRow::new("Edges", stats.edges),
                InfoRow::new(
                    "Shortest Route",
                    stats.distance.map_or_else(|| "(unreachable)".to_string(), format_distance),
                ),
            ];
            Ok(format_info_table(rows))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&stats)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_statistics() {
        let out = render(&PathFinder::default(), "S.B\n..X", OutputFormat::Text).unwrap();
        for expected in ["Size", "3 x 2", "(0, 0)", "(2, 1)", "Walkable Cells", "2.5"] {
            assert!(out.contains(expected), "missing {expected:?} in\n{out}");
        }
    }

    #[test]
    fn json_reports_graph_and_route() {
        let out = render(&PathFinder::default(), "S.\n.X", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        // A 2x2 open block: 4 straight and 2 diagonal moves.
        assert_eq!(value["edges"], 6);
        assert_eq!(value["distance"], 1.5);
    }

    #[test]
    fn json_reports_unreachable_end() {
        let out = render(&PathFinder::default(), "SBX", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["walls"], 1);
        assert_eq!(value["walkable"], 2);
        assert_eq!(value["edges"], 0);
        assert!(value["distance"].is_null());
    }
}
