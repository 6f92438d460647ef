//! Command implementations.

pub mod inspect;
pub mod route;

use std::io::Read;
use std::path::Path;

use tracing::debug;
use wayfinder_grid::{GridConfig, PathFinder};

use crate::error::{CliError, Result};

/// Build a path finder from the config file at `path`, or from defaults.
pub fn load_finder(path: Option<&Path>) -> Result<PathFinder> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.to_path_buf()));
            }
            debug!(path = %path.display(), "loading config");
            GridConfig::load(path)?
        }
        None => GridConfig::default(),
    };
    Ok(PathFinder::new(config)?)
}

/// Read a map file, or stdin when `path` is `-`.
pub fn read_map(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_are_reported() {
        let path = Path::new("does/not/exist.txt");
        assert!(matches!(read_map(path), Err(CliError::FileNotFound(_))));
        assert!(matches!(load_finder(Some(path)), Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn defaults_without_config() {
        let finder = load_finder(None).unwrap();
        assert_eq!(finder.config(), &GridConfig::default());
    }
}
