//! Geographic bounding boxes in WGS84 degrees

use crate::io::error::{GridError, Result};

/// Rectangular WGS84 region described by its four edges in degrees
///
/// Edges are stored west, south, east, north. A box is well formed when
/// west < east and south < north and every edge is finite; the tiling
/// primitive rejects anything else before producing geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Western edge (degrees longitude)
    pub west: f64,
    /// Southern edge (degrees latitude)
    pub south: f64,
    /// Eastern edge (degrees longitude)
    pub east: f64,
    /// Northern edge (degrees latitude)
    pub north: f64,
}

impl BoundingBox {
    /// Build a validated bounding box
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidBounds`] when an edge is not finite or
    /// the edges are out of order.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Result<Self> {
        let bbox = Self {
            west,
            south,
            east,
            north,
        };
        bbox.validate()?;
        Ok(bbox)
    }

    /// Check the ordering and finiteness invariants
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidBounds`] naming the violated invariant.
    pub const fn validate(&self) -> Result<()> {
        let finite = self.west.is_finite()
            && self.south.is_finite()
            && self.east.is_finite()
            && self.north.is_finite();
        if !finite {
            return Err(self.invalid("edges must be finite"));
        }
        if self.west >= self.east {
            return Err(self.invalid("west edge must lie strictly west of east edge"));
        }
        if self.south >= self.north {
            return Err(self.invalid("south edge must lie strictly south of north edge"));
        }
        Ok(())
    }

    /// Longitudinal span in degrees
    pub const fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Latitudinal span in degrees
    pub const fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Center of the box as a `[longitude, latitude]` position
    pub const fn center(&self) -> [f64; 2] {
        [
            f64::midpoint(self.west, self.east),
            f64::midpoint(self.south, self.north),
        ]
    }

    const fn invalid(&self, reason: &'static str) -> GridError {
        GridError::InvalidBounds {
            west: self.west,
            south: self.south,
            east: self.east,
            north: self.north,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BoundingBox;
    use crate::io::error::GridError;

    #[test]
    fn test_accepts_ordered_edges() {
        let bbox = BoundingBox::new(-125.0, 24.0, -66.5, 49.5).unwrap();
        assert!((bbox.width() - 58.5).abs() < 1e-12);
        assert!((bbox.height() - 25.5).abs() < 1e-12);
    }

    #[test]
    fn test_center_is_edge_midpoint() {
        let bbox = BoundingBox::new(-10.0, -4.0, 10.0, 4.0).unwrap();
        let center = bbox.center();
        assert!(center[0].abs() < 1e-12);
        assert!(center[1].abs() < 1e-12);
    }

    #[test]
    fn test_rejects_swapped_longitudes() {
        let err = BoundingBox::new(-66.5, 24.0, -125.0, 49.5).unwrap_err();
        assert!(matches!(err, GridError::InvalidBounds { .. }));
    }

    #[test]
    fn test_rejects_degenerate_latitudes() {
        let err = BoundingBox::new(-125.0, 24.0, -66.5, 24.0).unwrap_err();
        assert!(matches!(err, GridError::InvalidBounds { .. }));
    }

    #[test]
    fn test_rejects_non_finite_edges() {
        let err = BoundingBox::new(f64::NAN, 24.0, -66.5, 49.5).unwrap_err();
        assert!(matches!(err, GridError::InvalidBounds { .. }));
    }
}
