//! Content analysis built on top of the grid
//!
//! Pattern-based region discovery and summary statistics.

/// Regex scanning of grid rows
pub mod patterns;
/// Token frequencies and connected components
pub mod statistics;

pub use statistics::GridStatistics;
