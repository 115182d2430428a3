//! Input/output: CLI orchestration, GeoJSON export, and run feedback

/// Command-line parsing and run orchestration
pub mod cli;
/// Grid constants and configuration defaults
pub mod configuration;
/// Error types for generation and export
pub mod error;
/// GeoJSON document model and file export
pub mod geojson;
/// Terminal progress reporting
pub mod progress;
