//! Input/output operations and error handling

/// Command-line parsing and batch generation
pub mod cli;
/// Hex color parsing and formatting
pub mod color;
/// Generation constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG export
pub mod image;
/// Stderr backend for the log facade
pub mod logging;
/// Batch progress display
pub mod progress;
