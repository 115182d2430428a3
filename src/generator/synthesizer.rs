//! Cell synthesis pipeline
//!
//! Couples the tiler to the attribute synthesizer: hexagons are laid out
//! eagerly, then streamed one cell at a time with a shared noise source.
//! The stream order is the tiler's enumeration order, which makes the
//! whole run a pure function of bounding box, cell side, and seed.

use crate::generator::attributes::CellAttributes;
use crate::geometry::bbox::BoundingBox;
use crate::geometry::centroid::ring_centroid;
use crate::geometry::hexgrid::{Ring, hex_grid};
use crate::io::error::Result;
use crate::io::geojson::{Feature, FeatureCollection};
use crate::math::lcg::Lcg32;

/// Streaming producer of synthesized cell features
///
/// Yields one feature per cell, each stamped with a sequential `hex_id`
/// starting at zero. Drain it step by step to drive progress reporting,
/// or collect it into a [`FeatureCollection`].
#[derive(Debug)]
pub struct Synthesizer {
    rings: std::vec::IntoIter<Ring>,
    noise: Lcg32,
    next_id: u32,
    total_cells: usize,
}

impl Synthesizer {
    /// Tile `bbox` with cells of side `cell_side_km` and prepare the
    /// synthesis stream seeded with `seed`
    ///
    /// # Errors
    ///
    /// Returns an error when the bounding box edges are out of order or
    /// not finite, or when the cell side is not a positive finite number.
    pub fn new(bbox: BoundingBox, cell_side_km: f64, seed: u32) -> Result<Self> {
        let rings = hex_grid(bbox, cell_side_km)?;
        let total_cells = rings.len();

        Ok(Self {
            rings: rings.into_iter(),
            noise: Lcg32::new(seed),
            next_id: 0,
            total_cells,
        })
    }

    /// Number of cells the full stream yields
    pub const fn cell_count(&self) -> usize {
        self.total_cells
    }
}

impl Iterator for Synthesizer {
    type Item = Feature;

    fn next(&mut self) -> Option<Self::Item> {
        let ring = self.rings.next()?;
        let center = ring_centroid(&ring)?;

        let attributes = CellAttributes::synthesize(self.next_id, center, &mut self.noise);
        self.next_id += 1;

        Some(Feature::polygon(ring, attributes))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rings.size_hint()
    }
}

impl ExactSizeIterator for Synthesizer {}

/// Generate the feature collection for a bounding box in one call
///
/// Equivalent to draining a [`Synthesizer`] into a WGS84-tagged
/// collection. A cell side too large for the box yields an empty
/// collection.
///
/// # Errors
///
/// Returns an error when the bounding box edges are out of order or not
/// finite, or when the cell side is not a positive finite number.
pub fn generate(bbox: BoundingBox, cell_side_km: f64, seed: u32) -> Result<FeatureCollection> {
    let synthesizer = Synthesizer::new(bbox, cell_side_km, seed)?;
    Ok(FeatureCollection::from_features(synthesizer.collect()))
}
