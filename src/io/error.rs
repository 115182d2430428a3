//! Error types for grid generation and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid generation operations
#[derive(Debug)]
pub enum GridError {
    /// Bounding box edges are out of order or not finite
    InvalidBounds {
        /// Western edge in degrees longitude
        west: f64,
        /// Southern edge in degrees latitude
        south: f64,
        /// Eastern edge in degrees longitude
        east: f64,
        /// Northern edge in degrees latitude
        north: f64,
        /// Explanation of why the box is rejected
        reason: &'static str,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to serialize the feature collection
    Serialization {
        /// Path where the document was headed
        path: PathBuf,
        /// Underlying serializer error
        source: serde_json::Error,
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
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds {
                west,
                south,
                east,
                north,
                reason,
            } => {
                write!(
                    f,
                    "Invalid bounding box [{west}, {south}, {east}, {north}]: {reason}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to serialize features for '{}': {source}",
                    path.display()
                )
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
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid generation results
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

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            path: PathBuf::from("<unknown>"),
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
