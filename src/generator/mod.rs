//! Deterministic synthesis of indicator grids

/// Per-cell indicator attributes
pub mod attributes;
/// Tiling plus attribute synthesis pipeline
pub mod synthesizer;
