//! Dense token grid with wrap-around and border-sentinel addressing
//!
//! Every read and write passes through the same coordinate normalisation:
//! with `wrap` enabled both axes are reduced modulo the grid extent, otherwise
//! coordinates are used as given and anything outside the grid reads as a
//! fresh cell holding `border_value`.
//!
//! Rows shorter than the widest input row leave holes at their tail. A hole is
//! inside the grid for bounds checks but has no stored cell, so reading it
//! yields the border value current at the time of the read.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::DEFAULT_BORDER_VALUE;
use crate::spatial::point::{Cell, Point};

/// Rectangular grid of string tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Stored cells indexed by (`row`, `col`); `None` marks a hole
    cells: Array2<Option<Cell>>,

    /// Grid dimensions (rows, cols)
    dimensions: (usize, usize),

    /// Toroidal addressing for every read, write and neighbour lookup
    pub wrap: bool,

    /// Content reported for out-of-bounds reads when not wrapping
    pub border_value: String,
}

impl Grid {
    /// Build a grid from row strings, one cell per `char`
    ///
    /// The width is the length of the longest row. An empty input produces a
    /// 0x0 grid.
    pub fn new<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let cells = Array2::from_shape_fn((height, width), |(row, col)| {
            rows.get(row)
                .and_then(|chars| chars.get(col))
                .map(|token| Cell::new(col as i32, row as i32, token.to_string()))
        });

        log::debug!("Built {height}x{width} grid");
        Self::from_cells(cells)
    }

    /// Wrap an existing cell array; cells must already carry their own coordinates
    pub(crate) fn from_cells(cells: Array2<Option<Cell>>) -> Self {
        let dimensions = cells.dim();
        Self {
            cells,
            dimensions,
            wrap: false,
            border_value: DEFAULT_BORDER_VALUE.to_string(),
        }
    }

    /// Enable or disable toroidal addressing
    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the content returned for out-of-bounds reads
    #[must_use]
    pub fn with_border_value(mut self, border_value: impl Into<String>) -> Self {
        self.border_value = border_value.into();
        self
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.dimensions.0
    }

    /// Number of columns (longest input row)
    pub const fn width(&self) -> usize {
        self.dimensions.1
    }

    /// Check whether an unnormalised coordinate lies inside the grid
    pub fn in_bounds(&self, point: impl Into<Point>) -> bool {
        self.slot_index(point.into()).is_some()
    }

    /// Read the cell at a coordinate
    ///
    /// Never fails: out-of-bounds reads and holes produce a new cell holding
    /// `border_value` at the normalised coordinate.
    pub fn cell(&self, point: impl Into<Point>) -> Cell {
        let point = self.normalize(point.into());
        self.stored(point)
            .cloned()
            .unwrap_or_else(|| self.border_cell(point))
    }

    /// Replace the content at a coordinate
    ///
    /// Writes that land outside the grid after normalisation are ignored.
    pub fn set_value(&mut self, point: impl Into<Point>, value: impl Into<String>) {
        let point = self.normalize(point.into());
        let Some(index) = self.slot_index(point) else {
            log::trace!("Ignoring write outside grid at {point}");
            return;
        };
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = Some(Cell::new(point.x, point.y, value));
        }
    }

    /// Every cell of the grid, ordered by column and then by row
    pub fn cells(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.width() * self.height());
        for x in 0..self.width() {
            for y in 0..self.height() {
                let point = Point::new(x as i32, y as i32);
                cells.push(
                    self.stored(point)
                        .cloned()
                        .unwrap_or_else(|| self.border_cell(point)),
                );
            }
        }
        cells
    }

    /// Slots of one row in column order, `None` for holes
    pub(crate) fn row_cells(&self, row: usize) -> impl Iterator<Item = (usize, Option<&Cell>)> {
        (0..self.width()).map(move |col| {
            let cell = self.cells.get((row, col)).and_then(Option::as_ref);
            (col, cell)
        })
    }

    /// Concatenated values of one row
    pub fn row_string(&self, row: usize) -> String {
        self.row_cells(row)
            .filter_map(|(_, cell)| cell.map(Cell::value))
            .collect()
    }

    /// Render the grid as newline-separated rows
    ///
    /// Intended for debugging and display, not for parsing back.
    pub fn grid_string(&self) -> String {
        (0..self.height())
            .map(|row| self.row_string(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) const fn cell_array(&self) -> &Array2<Option<Cell>> {
        &self.cells
    }

    /// Apply wrap-around to a coordinate
    ///
    /// Uses a plain remainder after adding one extent, so coordinates more than
    /// one extent below zero stay negative and read as out of bounds.
    pub const fn normalize(&self, point: Point) -> Point {
        if !self.wrap {
            return point;
        }
        Point::new(
            wrap_axis(point.x, self.width()),
            wrap_axis(point.y, self.height()),
        )
    }

    fn slot_index(&self, point: Point) -> Option<(usize, usize)> {
        let col = usize::try_from(point.x).ok()?;
        let row = usize::try_from(point.y).ok()?;
        (row < self.height() && col < self.width()).then_some((row, col))
    }

    fn stored(&self, point: Point) -> Option<&Cell> {
        self.slot_index(point)
            .and_then(|index| self.cells.get(index))
            .and_then(Option::as_ref)
    }

    fn border_cell(&self, point: Point) -> Cell {
        Cell::new(point.x, point.y, self.border_value.as_str())
    }
}

// Extent 0 leaves the coordinate untouched instead of dividing by zero
const fn wrap_axis(value: i32, extent: usize) -> i32 {
    if extent == 0 {
        return value;
    }
    let extent = extent as i32;
    value.wrapping_add(extent) % extent
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid(height={}, width={}, wrap={}, border_value='{}')",
            self.height(),
            self.width(),
            self.wrap,
            self.border_value
        )?;
        f.write_str(&self.grid_string())
    }
}
