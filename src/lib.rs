//! Dense two-dimensional token grids for grid-shaped puzzles and maps
//!
//! A [`Grid`] is built from rows of text and addressed with integer
//! coordinates. Reads outside the grid either wrap around toroidally or yield a
//! configurable border value, so callers can walk neighbourhoods without edge
//! checks. On top of the addressing layer sit neighbour enumeration, flood-fill
//! selection, and regex-driven extraction of sub-regions.

#![forbid(unsafe_code)]

/// Neighbour enumeration, flood fill, and cell masks
pub mod algorithm;
/// Pattern scanning and summary statistics
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Grid, cell, point and region types
pub mod spatial;

pub use io::error::{GridError, Result};
pub use spatial::{Cell, Grid, Point, Region};
