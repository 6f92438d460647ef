//! `Wayfinder` Grid
//!
//! Turns ASCII maps into weighted graphs and routes across them with A*.
//!
//! A map is a rectangle of characters. By default `.` is open ground, `B` a
//! wall, `S` the start and `X` the end; [`GridConfig`] changes the roles and
//! the move costs.
//!
//! # Example
//!
//! ```
//! use wayfinder_grid::PathFinder;
//!
//! let finder = PathFinder::default();
//! let path = finder
//!     .find_shortest_path("..........\n.X......S.\n..........")?
//!     .expect("open map");
//! assert_eq!(path.len(), 7);
//! assert_eq!(path.distance(), 7.0);
//! # Ok::<(), wayfinder_grid::GridError>(())
//! ```

#![deny(clippy::unwrap_used)]

mod config;
mod error;
mod finder;
mod heuristic;
mod map;

pub use config::{GridConfig, MAX_HEURISTIC_CACHE};
pub use error::{GridError, GridResult};
pub use finder::{PathFinder, Route};
pub use heuristic::EuclideanHeuristic;
pub use map::{Cell, GridMap, Point};
