//! Flood-fill selection of connected cells
//!
//! Starting from one cell, repeatedly admits neighbours that satisfy a
//! predicate until no new cell qualifies. Work is kept on a stack, so the walk
//! is depth-first; the result is a set and does not expose the visiting order.

use std::collections::HashSet;

use crate::algorithm::bitset::CellMask;
use crate::spatial::grid::Grid;
use crate::spatial::point::{Cell, Point};

impl Grid {
    /// Select the cells connected to `point` that hold the same value as it
    pub fn fuzzy_select(&self, point: impl Into<Point>, diagonal: bool) -> HashSet<Cell> {
        let start = self.cell(point);
        let target = start.value().to_owned();
        flood_fill(self, start, diagonal, |cell| cell.value() == target)
    }

    /// Select the cells connected to `point` through cells accepted by `matcher`
    ///
    /// The start cell is always part of the selection. `matcher` is only used
    /// to filter candidates and may be called more than once for a cell.
    pub fn fuzzy_select_by<F>(
        &self,
        point: impl Into<Point>,
        diagonal: bool,
        matcher: F,
    ) -> HashSet<Cell>
    where
        F: FnMut(&Cell) -> bool,
    {
        let start = self.cell(point);
        flood_fill(self, start, diagonal, matcher)
    }
}

fn flood_fill<F>(grid: &Grid, start: Cell, diagonal: bool, mut matcher: F) -> HashSet<Cell>
where
    F: FnMut(&Cell) -> bool,
{
    // Only slots inside the mask can ever be admitted, which bounds the walk
    let mut visited = CellMask::new(grid.width(), grid.height());
    visited.insert(start.point());

    let mut pending = vec![start.clone()];
    let mut selected = HashSet::from([start]);

    while let Some(current) = pending.pop() {
        for neighbor in grid.neighbors(current.point(), diagonal, false) {
            let point = neighbor.point();
            if visited.contains(point) || !matcher(&neighbor) || !visited.insert(point) {
                continue;
            }
            selected.insert(neighbor.clone());
            pending.push(neighbor);
        }
    }

    log::trace!("Flood fill selected {} cells", selected.len());
    selected
}
