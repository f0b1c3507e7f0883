//! Regex-driven discovery of regions within grid rows
//!
//! Each row is flattened into one string while the byte span of every column
//! is recorded. Matches found in the flattened text are mapped back onto the
//! columns they touch, which keeps multi-character tokens and holes aligned
//! with the grid.

use ndarray::Array2;
use regex::{Match, Regex};
use std::ops::Range;

use crate::io::error::{GridError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::point::Point;
use crate::spatial::region::Region;

/// A row flattened to text with the byte span of each column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowText {
    /// Concatenated cell values
    pub text: String,
    /// Byte range of each column within `text`; holes have empty spans
    pub spans: Vec<Range<usize>>,
}

impl RowText {
    /// Flatten one row of the grid
    pub fn from_row(grid: &Grid, row: usize) -> Self {
        let mut text = String::new();
        let mut spans = Vec::with_capacity(grid.width());
        for (_, cell) in grid.row_cells(row) {
            let start = text.len();
            if let Some(cell) = cell {
                text.push_str(cell.value());
            }
            spans.push(start..text.len());
        }
        Self { text, spans }
    }

    /// Columns covered by a byte range of the flattened text
    ///
    /// Returns the first and last column (inclusive) that overlap the range,
    /// or `None` for an empty range.
    pub fn columns(&self, bytes: &Range<usize>) -> Option<(usize, usize)> {
        if bytes.is_empty() {
            return None;
        }
        let first = self.spans.iter().position(|span| span.end > bytes.start)?;
        let last = self.spans.iter().rposition(|span| span.start < bytes.end)?;
        (first <= last).then_some((first, last))
    }

    /// Column containing a byte offset, or the row width past the last column
    pub fn column_at(&self, byte: usize) -> usize {
        self.spans
            .iter()
            .position(|span| span.end > byte)
            .unwrap_or(self.spans.len())
    }
}

impl Grid {
    /// Find every run of text matching `pattern`, row by row
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPattern`] if the pattern does not compile.
    pub fn find_regions(&self, pattern: &str) -> Result<Vec<Region>> {
        let regex = Regex::new(pattern).map_err(|source| GridError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.find_regions_with(&regex)
    }

    /// Find every run of text matching a compiled regex, row by row
    ///
    /// Each match becomes a one-row region covering the columns it touches;
    /// results are ordered by row and then by column. An empty match becomes
    /// a zero-width region whose origin is the column where it was found.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RegionOutOfBounds`] if a match maps outside the
    /// row, which the column spans rule out.
    pub fn find_regions_with(&self, regex: &Regex) -> Result<Vec<Region>> {
        let mut regions = Vec::new();
        for row in 0..self.height() {
            let row_text = RowText::from_row(self, row);
            let y = row as i32;
            for found in scan(regex, &row_text.text) {
                let region = match row_text.columns(&found.range()) {
                    Some((first, last)) => self.region(first as i32..=last as i32, y..=y)?,
                    None => {
                        let x = row_text.column_at(found.start()) as i32;
                        Region::new(
                            Point::new(x, y),
                            Self::from_cells(Array2::from_elem((1, 0), None)),
                        )
                    }
                };
                regions.push(region);
            }
        }
        log::debug!("Pattern '{}' matched {} regions", regex.as_str(), regions.len());
        Ok(regions)
    }
}

// Leftmost-first matches, resuming at the end of each match. An empty match
// is still reported directly after a non-empty one; the search then steps
// one character past it.
fn scan<'t>(regex: &Regex, text: &'t str) -> Vec<Match<'t>> {
    let mut found = Vec::new();
    let mut at = 0;
    while let Some(m) = regex.find_at(text, at) {
        found.push(m);
        at = if m.is_empty() {
            match text.get(m.end()..).and_then(|rest| rest.chars().next()) {
                Some(next) => m.end() + next.len_utf8(),
                None => break,
            }
        } else {
            m.end()
        };
    }
    found
}
