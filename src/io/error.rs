//! Error types for grid operations and the file front end

use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Requested region does not fit inside the grid
    ///
    /// Occurs when either range:
    /// - Starts after it ends
    /// - Starts below zero
    /// - Ends at or beyond the grid extent
    RegionOutOfBounds {
        /// Requested columns (inclusive)
        x_range: RangeInclusive<i32>,
        /// Requested rows (inclusive)
        y_range: RangeInclusive<i32>,
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Region pattern failed to compile
    InvalidPattern {
        /// Pattern as supplied
        pattern: String,
        /// Underlying regex error
        source: regex::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Target path is neither a usable file nor a directory
    InvalidTarget {
        /// Path supplied by the caller
        path: PathBuf,
        /// Why the target was rejected
        reason: &'static str,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a rendered grid to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegionOutOfBounds {
                x_range,
                y_range,
                dimensions,
            } => {
                write!(
                    f,
                    "Region x={}..={}, y={}..={} is outside the grid (size {}x{})",
                    x_range.start(),
                    x_range.end(),
                    y_range.start(),
                    y_range.end(),
                    dimensions.0,
                    dimensions.1
                )
            }
            Self::InvalidPattern { pattern, source } => {
                write!(f, "Invalid region pattern '{pattern}': {source}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
