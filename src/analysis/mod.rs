//! Statistical summaries of generated grids

/// Per-indicator aggregate statistics
pub mod summary;
