//! Error types for grid maps.

use thiserror::Error;
use wayfinder_graph::store::GraphError;

use crate::Point;

/// Errors that can occur while loading or routing a grid map.
#[derive(Debug, Error)]
pub enum GridError {
    /// The map has no rows or no columns.
    #[error("map is empty")]
    EmptyMap,

    /// A row differs in length from the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// A character with no configured role.
    #[error("invalid character '{ch}' at {at}")]
    InvalidChar {
        /// The character found.
        ch: char,
        /// Where it was found.
        at: Point,
    },

    /// The start or end marker does not appear in the map.
    #[error("{role} position couldn't be found (expected '{ch}')")]
    MissingMarker {
        /// Which marker is missing.
        role: &'static str,
        /// The configured marker character.
        ch: char,
    },

    /// The start or end marker appears more than once.
    #[error("{role} marker appears more than once: {first} and {second}")]
    DuplicateMarker {
        /// Which marker is duplicated.
        role: &'static str,
        /// First occurrence.
        first: Point,
        /// Second occurrence.
        second: Point,
    },

    /// The configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for [`GridConfig`](crate::GridConfig).
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The path search failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
