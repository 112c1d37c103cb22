//! Output side of the animation: configuration, errors, export and the CLI

/// Command-line interface and render orchestration
pub mod cli;
/// Fixed visual constants and CLI defaults
pub mod configuration;
/// Error type for export operations
pub mod error;
/// PNG export of single frames
pub mod image;
/// `tracing` subscriber setup
pub mod logging;
/// Progress bar over rendered frames
pub mod progress;
/// Frame capture and animated GIF export
pub mod visualization;
