//! Rectangular snapshots cut out of a grid
//!
//! A region owns its own copy of the cells, re-addressed from (0, 0), and
//! remembers where its top-left corner sat in the source grid.

use ndarray::Array2;
use std::fmt;
use std::ops::{Deref, DerefMut, RangeInclusive};

use crate::io::error::{GridError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::point::{Cell, Point};

/// Sub-grid extracted from a parent grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    origin: Point,
    grid: Grid,
}

impl Region {
    /// Combine a grid with its origin in the parent coordinate space
    pub const fn new(origin: Point, grid: Grid) -> Self {
        Self { origin, grid }
    }

    /// Top-left corner in parent coordinates
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Column of the top-left corner in parent coordinates
    pub const fn origin_x(&self) -> i32 {
        self.origin.x
    }

    /// Row of the top-left corner in parent coordinates
    pub const fn origin_y(&self) -> i32 {
        self.origin.y
    }

    /// Borrow the region's own grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Drop the origin and keep the grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Translate a region-local coordinate into parent coordinates
    pub const fn to_parent(&self, local: Point) -> Point {
        local.offset(self.origin.x, self.origin.y)
    }
}

impl Deref for Region {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        &self.grid
    }
}

impl DerefMut for Region {
    fn deref_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Region(origin_x={}, origin_y={}, height={}, width={})",
            self.origin.x,
            self.origin.y,
            self.grid.height(),
            self.grid.width()
        )?;
        f.write_str(&self.grid.grid_string())
    }
}

impl Grid {
    /// Copy the cells inside inclusive column and row ranges into a new region
    ///
    /// The region starts with wrapping disabled and the default border value.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RegionOutOfBounds`] if either range is empty or
    /// reaches outside the grid.
    pub fn region(
        &self,
        x_range: RangeInclusive<i32>,
        y_range: RangeInclusive<i32>,
    ) -> Result<Region> {
        let out_of_bounds = || GridError::RegionOutOfBounds {
            x_range: x_range.clone(),
            y_range: y_range.clone(),
            dimensions: (self.height(), self.width()),
        };

        let cols = checked_span(&x_range, self.width()).ok_or_else(out_of_bounds)?;
        let rows = checked_span(&y_range, self.height()).ok_or_else(out_of_bounds)?;

        let shape = (rows.end() - rows.start() + 1, cols.end() - cols.start() + 1);
        let cells = Array2::from_shape_fn(shape, |(row, col)| {
            self.cell_array()
                .get((rows.start() + row, cols.start() + col))
                .and_then(Option::as_ref)
                .map(|cell| Cell::new(col as i32, row as i32, cell.value()))
        });

        Ok(Region::new(
            Point::new(*x_range.start(), *y_range.start()),
            Self::from_cells(cells),
        ))
    }
}

// Converts an inclusive coordinate range into array indices if it fits in `extent`
fn checked_span(range: &RangeInclusive<i32>, extent: usize) -> Option<RangeInclusive<usize>> {
    let start = usize::try_from(*range.start()).ok()?;
    let end = usize::try_from(*range.end()).ok()?;
    (start <= end && end < extent).then_some(start..=end)
}
