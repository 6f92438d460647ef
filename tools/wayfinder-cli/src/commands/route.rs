//! Route command implementation.

use std::path::Path;

use serde::Serialize;
use wayfinder_graph::traversal::WeightedPath;
use wayfinder_grid::{PathFinder, Point};

use crate::commands::read_map;
use crate::error::Result;
use crate::output::format_distance;
use crate::OutputFormat;

#[derive(Serialize)]
struct RouteReport<'a> {
    start: Point,
    end: Point,
    path: Option<&'a WeightedPath<Point>>,
}

/// Route across the map at `path` and print the result.
pub fn run(finder: &PathFinder, path: &Path, format: OutputFormat) -> Result<()> {
    let text = read_map(path)?;
    println!("{}", render(finder, &text, format)?);
    Ok(())
}

/// Route across `text`, returning the marked map and a summary line, or a
/// JSON report.
pub fn render(finder: &PathFinder, text: &str, format: OutputFormat) -> Result<String> {
    let map = finder.parse(text)?;
    let route = finder.route(map.clone())?;
    let path = route.as_ref().map(|route| route.path());

    match format {
        OutputFormat::Text => {
            let marker = finder.config().path;
            let (marked, summary) = match path {
                Some(path) => (
                    map.render(finder.config(), path.vertices(), marker),
                    format!("Distance: {} ({} moves)", format_distance(path.distance()), path.len()),
                ),
                None => (
                    map.render(finder.config(), std::iter::empty(), marker),
                    format!("No route from {} to {}", map.start(), map.end()),
                ),
            };
            Ok(format!("{marked}\n\n{summary}"))
        }
        OutputFormat::Json => {
            let report = RouteReport { start: map.start(), end: map.end(), path };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}
