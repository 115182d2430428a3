//! Numeric utilities for deterministic synthesis

/// Seeded linear congruential noise source
pub mod lcg;
/// Fixed-decimal rounding helpers
pub mod rounding;
