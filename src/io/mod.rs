//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Error types for collage operations
pub mod error;
/// Source-image loading and canvas export
pub mod image;
/// Progress reporting sinks
pub mod progress;
