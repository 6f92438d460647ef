//! Grid map configuration.
//!
//! Every field has a default, so a partial (or empty) TOML file is valid.
//!
//! # Example Configuration
//!
//! ```toml
//! open = "."
//! wall = "#"
//! start = "S"
//! end = "X"
//! path = "*"
//!
//! straight_cost = 1.0
//! diagonal_cost = 1.5
//! heuristic_cache = 200
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{GridError, GridResult};

/// Largest accepted `heuristic_cache`; the table holds its square.
pub const MAX_HEURISTIC_CACHE: usize = 1024;

/// Character roles, move costs and heuristic settings for grid maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// A walkable cell.
    pub open: char,
    /// An impassable cell.
    pub wall: char,
    /// The walkable cell the route starts from.
    pub start: char,
    /// The walkable cell the route ends at.
    pub end: char,
    /// Marker drawn over cells on the route.
    pub path: char,
    /// Cost of a horizontal or vertical step.
    pub straight_cost: f64,
    /// Cost of a diagonal step.
    pub diagonal_cost: f64,
    /// Side length of the precomputed distance table, at most
    /// [`MAX_HEURISTIC_CACHE`].
    pub heuristic_cache: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            open: '.',
            wall: 'B',
            start: 'S',
            end: 'X',
            path: '*',
            straight_cost: 1.0,
            diagonal_cost: 1.5,
            heuristic_cache: 200,
        }
    }
}

impl GridConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> GridResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> GridResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    ///
    /// Map roles must use distinct characters, and costs must be finite and
    /// positive with diagonal steps costing at least as much as straight ones.
    /// The heuristic cache may not exceed [`MAX_HEURISTIC_CACHE`].
    pub fn validate(&self) -> GridResult<()> {
        let roles =
            [("open", self.open), ("wall", self.wall), ("start", self.start), ("end", self.end)];
        for (i, (name, ch)) in roles.iter().enumerate() {
            if let Some((other, _)) = roles[i + 1..].iter().find(|(_, c)| c == ch) {
                return Err(GridError::InvalidConfig(format!(
                    "'{ch}' is used for both {name} and {other}"
                )));
            }
            if ch.is_whitespace() {
                return Err(GridError::InvalidConfig(format!("{name} cannot be whitespace")));
            }
        }

        for (name, cost) in [("straight_cost", self.straight_cost), ("diagonal_cost", self.diagonal_cost)] {
            if !cost.is_finite() || cost <= 0.0 {
                return Err(GridError::InvalidConfig(format!(
                    "{name} must be a positive number, got {cost}"
                )));
            }
        }
        if self.diagonal_cost < self.straight_cost {
            return Err(GridError::InvalidConfig(format!(
                "diagonal_cost ({}) cannot be below straight_cost ({})",
                self.diagonal_cost, self.straight_cost
            )));
        }
        if self.heuristic_cache > MAX_HEURISTIC_CACHE {
            return Err(GridError::InvalidConfig(format!(
                "heuristic_cache ({}) cannot exceed {MAX_HEURISTIC_CACHE}",
                self.heuristic_cache
            )));
        }
        Ok(())
    }

    /// Factor applied to Euclidean distance so the estimate never exceeds
    /// the cheapest route cost under these move costs.
    pub fn heuristic_scale(&self) -> f64 {
        self.straight_cost.min(self.diagonal_cost / std::f64::consts::SQRT_2)
    }
}
