//! Input/output operations and error handling

/// Argument parsing and batch processing
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Writing sheets to disk
pub mod export;
/// Tracing subscriber setup
pub mod logging;
/// Batch progress display
pub mod progress;
