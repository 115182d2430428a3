//! Command-line interface for generating indicator grids as GeoJSON

use crate::analysis::summary::CollectionSummary;
use crate::generator::synthesizer::Synthesizer;
use crate::geometry::bbox::BoundingBox;
use crate::io::configuration::{
    DEFAULT_CELL_KM, DEFAULT_EAST, DEFAULT_NORTH, DEFAULT_SEED, DEFAULT_SOUTH, DEFAULT_WEST,
};
use crate::io::error::Result;
use crate::io::geojson::{FeatureCollection, export_collection};
use crate::io::progress::ProgressReporter;
use clap::Parser;
use rand::Rng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hexmock")]
#[command(
    author,
    version,
    about = "Generate deterministic synthetic indicator grids as GeoJSON"
)]
/// Command-line arguments for the grid generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output GeoJSON file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Western edge of the region in degrees longitude
    #[arg(long, default_value_t = DEFAULT_WEST, allow_negative_numbers = true)]
    pub west: f64,

    /// Southern edge of the region in degrees latitude
    #[arg(long, default_value_t = DEFAULT_SOUTH, allow_negative_numbers = true)]
    pub south: f64,

    /// Eastern edge of the region in degrees longitude
    #[arg(long, default_value_t = DEFAULT_EAST, allow_negative_numbers = true)]
    pub east: f64,

    /// Northern edge of the region in degrees latitude
    #[arg(long, default_value_t = DEFAULT_NORTH, allow_negative_numbers = true)]
    pub north: f64,

    /// Hexagon side length in kilometers
    #[arg(short, long, default_value_t = DEFAULT_CELL_KM)]
    pub cell_km: f64,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u32,

    /// Draw the seed from system entropy instead of --seed
    #[arg(long, conflicts_with = "seed")]
    pub random_seed: bool,

    /// Indent the output document for reading
    #[arg(short, long)]
    pub pretty: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    pub force: bool,

    /// Print per-indicator statistics after generation
    #[arg(long)]
    pub stats: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Bounding box assembled from the edge arguments
    ///
    /// # Errors
    ///
    /// Returns an error when the edges are out of order or not finite.
    pub fn bbox(&self) -> Result<BoundingBox> {
        BoundingBox::new(self.west, self.south, self.east, self.north)
    }

    /// Seed for this run, honoring `--random-seed`
    pub fn effective_seed(&self) -> u32 {
        if self.random_seed {
            rand::rng().random()
        } else {
            self.seed
        }
    }
}

/// Orchestrates a generation run from parsed arguments
pub struct GridProcessor {
    cli: Cli,
}

impl GridProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the grid and write it to the output path
    ///
    /// An existing output file is left untouched unless `--force` is
    /// given; the run then succeeds without generating anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the region or cell side is invalid, or if the
    /// output file cannot be written.
    // Allow print for user feedback for run summaries
    #[allow(clippy::print_stderr)]
    pub fn process(&self) -> Result<()> {
        if self.cli.output.exists() && !self.cli.force {
            if !self.cli.quiet {
                eprintln!(
                    "Skipping: {} (output exists, use --force to overwrite)",
                    self.cli.output.display()
                );
            }
            return Ok(());
        }

        let bbox = self.cli.bbox()?;
        let seed = self.cli.effective_seed();

        let synthesizer = Synthesizer::new(bbox, self.cli.cell_km, seed)?;
        let progress =
            ProgressReporter::start(synthesizer.cell_count(), self.cli.should_show_progress());

        let mut features = Vec::with_capacity(synthesizer.cell_count());
        for feature in synthesizer {
            features.push(feature);
            progress.cell_done();
        }
        progress.finish();

        let collection = FeatureCollection::from_features(features);
        export_collection(&collection, &self.cli.output, self.cli.pretty)?;

        if self.cli.stats {
            CollectionSummary::from_collection(&collection).map_or_else(
                || eprintln!("No cells generated (cell side exceeds the region)"),
                |summary| eprintln!("{summary}"),
            );
        }

        if !self.cli.quiet {
            eprintln!(
                "Wrote {} cells to {} (seed {seed})",
                collection.len(),
                self.cli.output.display()
            );
        }

        Ok(())
    }
}
