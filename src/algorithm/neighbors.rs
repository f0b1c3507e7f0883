//! Neighbour enumeration around a coordinate
//!
//! Offsets are visited with `dx` as the outer loop and `dy` as the inner loop,
//! both running from -1 to 1. Callers that walk the grid deterministically rely
//! on this order.

use crate::spatial::grid::Grid;
use crate::spatial::point::{Cell, Point};

/// The eight surrounding offsets in enumeration order
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Check whether an offset moves along a single axis
pub const fn is_orthogonal((dx, dy): (i32, i32)) -> bool {
    dx == 0 || dy == 0
}

impl Grid {
    /// Cells surrounding `point`
    ///
    /// With `diagonal` unset only the four orthogonal neighbours are considered.
    /// A candidate is kept when `include_oob` is set, when the grid wraps, or
    /// when the candidate lies inside the grid before normalisation. Kept
    /// candidates are read through [`Grid::cell`], so border and wrap rules
    /// apply to them as to any other read.
    pub fn neighbors(&self, point: impl Into<Point>, diagonal: bool, include_oob: bool) -> Vec<Cell> {
        let point = point.into();
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&offset| diagonal || is_orthogonal(offset))
            .map(|&(dx, dy)| point.offset(dx, dy))
            .filter(|&candidate| include_oob || self.wrap || self.in_bounds(candidate))
            .map(|candidate| self.cell(candidate))
            .collect()
    }

    /// All eight neighbours that exist in the grid (or wrap around it)
    pub fn adjacent(&self, point: impl Into<Point>) -> Vec<Cell> {
        self.neighbors(point, true, false)
    }
}
