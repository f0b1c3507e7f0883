//! Spatial data structures
//!
//! This module contains the grid itself and the values it hands out:
//! - Coordinates and cells
//! - The dense grid and its addressing rules
//! - Regions extracted from a grid

/// Dense grid storage and addressing
pub mod grid;
/// Coordinate and cell value types
pub mod point;
/// Rectangular sub-grids with an origin in their parent
pub mod region;

pub use grid::Grid;
pub use point::{Cell, Point};
pub use region::Region;
