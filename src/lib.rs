//! Deterministic synthetic environmental-indicator grids over hexagonal tilings
//!
//! The system tiles a geographic bounding box with flat-top hexagons, then
//! synthesizes plausible per-cell indicators (pollution, health, demographic)
//! from seeded noise layered over smooth spatial gradients. Identical inputs
//! always yield an identical GeoJSON feature collection, making generated
//! grids reproducible fixtures for map styling and pipeline tests.

#![forbid(unsafe_code)]

/// Statistical summaries of generated grids
pub mod analysis;
/// Attribute synthesis and the generation pipeline
pub mod generator;
/// Bounding boxes, hexagonal tilings, and geographic measurements
pub mod geometry;
/// CLI orchestration, GeoJSON export, and error handling
pub mod io;
/// Numeric utilities for deterministic synthesis
pub mod math;

pub use generator::synthesizer::{Synthesizer, generate};
pub use geometry::bbox::BoundingBox;
pub use io::error::{GridError, Result};
pub use io::geojson::{Feature, FeatureCollection};
