//! Error types and context management for pattern generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all sizing, drawing and export operations
#[derive(Debug)]
pub enum PatternError {
    /// The requested brush cannot tile the canvas
    ///
    /// Raised when the tile:
    /// - exceeds the canvas width or height
    /// - does not divide the canvas width
    /// - cannot be reproduced as `gcd(width, h')` for any cropped height `h'`
    InvalidTileSize {
        /// Canvas width in pixels
        width: u32,
        /// Canvas height in pixels
        height: u32,
        /// Requested tile edge in pixels
        tile: u32,
        /// Explanation of why the tile was rejected
        reason: String,
    },

    /// Canvas or brush dimensions are zero or out of the supported range
    InvalidDimensions {
        /// Canvas width in pixels
        width: u32,
        /// Canvas height in pixels
        height: u32,
        /// Explanation of why the dimensions were rejected
        reason: String,
    },

    /// Color string could not be parsed
    InvalidColor {
        /// Offending input
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Front-end parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// The global log subscriber could not be installed
    LoggerInit {
        /// Underlying installation error
        source: tracing_subscriber::util::TryInitError,
    },

    /// Internal computation produced an inconsistent result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileSize {
                width,
                height,
                tile,
                reason,
            } => {
                write!(
                    f,
                    "Invalid tile size {tile} for a {width}x{height} canvas: {reason}"
                )
            }
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid canvas dimensions {width}x{height}: {reason}")
            }
            Self::InvalidColor { value, reason } => {
                write!(f, "Invalid color '{value}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
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
            Self::LoggerInit { source } => {
                write!(f, "Failed to install logger: {source}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::LoggerInit { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;

/// Additional context to enrich I/O error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Path the failing operation touched
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches converted errors with the path and operation they occurred in
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add path and operation context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<PatternError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only filesystem-backed errors carry a location worth patching
            match &mut error {
                PatternError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(p) = context.path {
                        *path = p;
                    }
                    if let Some(op) = context.operation {
                        *operation = op;
                    }
                }
                PatternError::ImageExport { path, .. } => {
                    if let Some(p) = context.path {
                        *path = p;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.into()),
            operation: Some(operation),
        })
    }
}

impl From<image::ImageError> for PatternError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid tile size error
pub fn invalid_tile_size(
    width: u32,
    height: u32,
    tile: u32,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidTileSize {
        width,
        height,
        tile,
        reason: reason.to_string(),
    }
}

/// Create an invalid dimensions error
pub fn invalid_dimensions(width: u32, height: u32, reason: &impl ToString) -> PatternError {
    PatternError::InvalidDimensions {
        width,
        height,
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PatternError {
    PatternError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
