//! Summary statistics over grid contents
//!
//! Token frequencies and the partition of the grid into connected groups of
//! equal tokens.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::algorithm::bitset::CellMask;
use crate::spatial::grid::Grid;
use crate::spatial::point::Cell;

/// Count occurrences of each token across [`Grid::cells`]
///
/// Holes are counted under the border value.
pub fn value_counts(grid: &Grid) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for cell in grid.cells() {
        *counts.entry(cell.value().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Partition the grid into connected components of equal tokens
///
/// Components are discovered in [`Grid::cells`] order, so the first component
/// always contains the cell at (0, 0).
pub fn connected_components(grid: &Grid, diagonal: bool) -> Vec<HashSet<Cell>> {
    let mut claimed = CellMask::new(grid.width(), grid.height());
    let mut components = Vec::new();

    for cell in grid.cells() {
        if claimed.contains(cell.point()) {
            continue;
        }
        let component = grid.fuzzy_select(cell.point(), diagonal);
        for member in &component {
            claimed.insert(member.point());
        }
        components.push(component);
    }

    components
}

/// Aggregate description of a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStatistics {
    /// Number of rows
    pub height: usize,
    /// Number of columns
    pub width: usize,
    /// Occurrences per token
    pub value_counts: BTreeMap<String, usize>,
    /// Number of connected equal-token components
    pub components: usize,
    /// Size of the largest component
    pub largest_component: usize,
}

impl GridStatistics {
    /// Gather statistics for a grid
    pub fn from_grid(grid: &Grid, diagonal: bool) -> Self {
        let components = connected_components(grid, diagonal);
        Self {
            height: grid.height(),
            width: grid.width(),
            value_counts: value_counts(grid),
            components: components.len(),
            largest_component: components.iter().map(HashSet::len).max().unwrap_or(0),
        }
    }

    /// Number of distinct tokens
    pub fn distinct_values(&self) -> usize {
        self.value_counts.len()
    }
}

impl fmt::Display for GridStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} grid, {} distinct values, {} components (largest {})",
            self.height,
            self.width,
            self.distinct_values(),
            self.components,
            self.largest_component
        )
    }
}
