//! Geographic primitives: bounding boxes, hexagonal tilings, and the
//! measurements they are built on

/// Validated WGS84 bounding boxes
pub mod bbox;
/// Representative points of cell rings
pub mod centroid;
/// Great-circle distance on the WGS84 mean sphere
pub mod distance;
/// Flat-top hexagon tiling of a bounding box
pub mod hexgrid;
