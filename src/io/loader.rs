//! Loading grids from text
//!
//! One line of text becomes one grid row. Both `\n` and `\r\n` endings are
//! accepted and a trailing newline does not add an empty row.

use std::convert::Infallible;
use std::path::Path;
use std::str::FromStr;

use crate::io::error::{GridError, Result};
use crate::spatial::grid::Grid;

/// Split text into grid rows
pub fn parse_rows(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Read a UTF-8 text file into a grid
///
/// # Errors
///
/// Returns [`GridError::FileSystem`] if the file cannot be read or is not
/// valid UTF-8.
pub fn load_grid(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path).map_err(|source| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "read grid",
        source,
    })?;
    let grid = Grid::new(parse_rows(&text));
    log::debug!(
        "Loaded {}x{} grid from {}",
        grid.height(),
        grid.width(),
        path.display()
    );
    Ok(grid)
}

impl FromStr for Grid {
    type Err = Infallible;

    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(parse_rows(text)))
    }
}
