//! Input/output, configuration and error handling
//!
//! Everything that touches the outside world lives here: loading grids from
//! text, rendering them to images, the command-line front end, and the
//! crate-wide error type.

/// Command-line interface and batch processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering
pub mod image;
/// Text loading
pub mod loader;
/// Batch progress display
pub mod progress;
