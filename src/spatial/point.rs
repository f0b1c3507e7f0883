//! Coordinate and cell value types
//!
//! `Point` is a plain addressing key. `Cell` pairs a coordinate with the token
//! stored there; it is never mutated in place, grid writes replace it.

use std::fmt;

/// Integer grid coordinate, `x` grows to the right and `y` grows downward
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Point {
    /// Create a point from its column and row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift the point by the given deltas
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<&Cell> for Point {
    fn from(cell: &Cell) -> Self {
        cell.point()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A grid location together with its content
///
/// Equality and hashing cover all three fields, so two reads of the same
/// unmodified location compare equal while a rewritten location does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    x: i32,
    y: i32,
    value: String,
}

impl Cell {
    /// Create a cell at `(x, y)` holding `value`
    pub fn new(x: i32, y: i32, value: impl Into<String>) -> Self {
        Self {
            x,
            y,
            value: value.into(),
        }
    }

    /// Column of the cell
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Row of the cell
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Token stored at this location
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Coordinate of the cell
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
