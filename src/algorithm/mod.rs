//! Grid traversal algorithms
//!
//! Neighbour enumeration, flood-fill selection, and the bit mask that tracks
//! visited cells during a fill.

/// Bit-per-cell membership set
pub mod bitset;
/// Neighbour enumeration
pub mod neighbors;
/// Flood-fill selection
pub mod selection;

pub use bitset::CellMask;
