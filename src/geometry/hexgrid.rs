//! Hexagonal tiling of a geographic bounding box
//!
//! Lays out flat-top hexagons column by column, west to east, each column
//! walked south to north, with odd columns dropped half a cell so the grid
//! interlocks. The nominal cell side is given in kilometers and converted
//! to per-axis degree radii along the box's center lines, so cells keep
//! their requested size at the middle of the region. Enumeration order is
//! deterministic and is the order every downstream consumer sees.

use crate::geometry::bbox::BoundingBox;
use crate::geometry::distance::haversine_km;
use crate::io::error::{Result, invalid_parameter};
use std::f64::consts::FRAC_PI_3;

/// Closed ring of `[longitude, latitude]` positions
///
/// Hexagon rings hold seven positions: six vertices plus a repeat of the
/// first vertex closing the ring.
pub type Ring = Vec<[f64; 2]>;

/// Tile `bbox` with flat-top hexagons of nominal side `cell_side_km`
///
/// A cell side too large for the box yields an empty tiling, which is a
/// valid result; only malformed inputs are rejected.
///
/// # Errors
///
/// Returns [`GridError::InvalidBounds`](crate::io::error::GridError) when
/// the box edges are out of order or not finite, and
/// [`GridError::InvalidParameter`](crate::io::error::GridError) when the
/// cell side is not a positive finite number.
pub fn hex_grid(bbox: BoundingBox, cell_side_km: f64) -> Result<Vec<Ring>> {
    bbox.validate()?;
    if !cell_side_km.is_finite() || cell_side_km <= 0.0 {
        return Err(invalid_parameter(
            "cell_side_km",
            &cell_side_km,
            &"cell side must be a positive, finite number of kilometers",
        ));
    }

    let center = bbox.center();
    let box_width = bbox.width();
    let box_height = bbox.height();

    // Degree extents of one cell, anchored to real kilometers measured
    // along the center parallel and the center meridian.
    let width_km = haversine_km([bbox.west, center[1]], [bbox.east, center[1]]);
    let height_km = haversine_km([center[0], bbox.south], [center[0], bbox.north]);
    let cell_width_deg = cell_side_km * 2.0 / width_km * box_width;
    let cell_height_deg = cell_side_km * 2.0 / height_km * box_height;

    let radius = cell_width_deg / 2.0;
    let hex_width = cell_width_deg;
    let hex_height = 3.0_f64.sqrt() / 2.0 * cell_height_deg;

    let x_interval = 0.75 * hex_width;
    let y_interval = hex_height;

    // Cell counts are trimmed so every hexagon fits inside the box; the
    // adjustments center the trimmed grid over the leftover margin.
    let x_count = ((box_width - hex_width) / (hex_width - radius / 2.0)).floor() as i64;
    let x_adjust = ((x_count as f64).mul_add(x_interval, -radius / 2.0) - box_width) / 2.0
        - radius / 2.0
        + x_interval / 2.0;

    let y_count = ((box_height - hex_height) / y_interval).floor() as i64;
    let y_adjust = (y_count as f64).mul_add(-hex_height, box_height) / 2.0;

    let mut rings = Vec::with_capacity(ring_capacity(x_count, y_count));

    for column in 0..=x_count {
        let shifted = column % 2 == 1;
        for row in 0..=y_count {
            // A shifted column's first cell would hang below the box
            if row == 0 && shifted {
                continue;
            }

            let center_x = (column as f64).mul_add(x_interval, bbox.west - x_adjust);
            let mut center_y = (row as f64).mul_add(y_interval, bbox.south + y_adjust);
            if shifted {
                center_y -= hex_height / 2.0;
            }

            rings.push(hexagon(
                center_x,
                center_y,
                cell_width_deg / 2.0,
                cell_height_deg / 2.0,
            ));
        }
    }

    Ok(rings)
}

// Capacity hint for a tiling; counts round negative when no cell fits,
// and degenerate cell sides saturate the hint instead of overflowing it
const fn ring_capacity(x_count: i64, y_count: i64) -> usize {
    if x_count >= 0 && y_count >= 0 {
        x_count.saturating_add(1).saturating_mul(y_count.saturating_add(1)) as usize
    } else {
        0
    }
}

// Flat-top hexagon ring; vertex zero sits due east of the center
fn hexagon(center_x: f64, center_y: f64, radius_x: f64, radius_y: f64) -> Ring {
    let mut ring = Ring::with_capacity(7);
    for vertex in 0..6_u32 {
        let angle = f64::from(vertex) * FRAC_PI_3;
        ring.push([
            radius_x.mul_add(angle.cos(), center_x),
            radius_y.mul_add(angle.sin(), center_y),
        ]);
    }
    if let Some(first) = ring.first().copied() {
        ring.push(first);
    }
    ring
}
