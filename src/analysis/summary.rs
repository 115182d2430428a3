//! Aggregate statistics over generated collections
//!
//! A quick sanity lens on a run: per-indicator minimum, maximum, and
//! mean across every cell. Useful for eyeballing whether the synthesized
//! surfaces span their intended ranges before handing the file to a map.

use crate::generator::attributes::CellAttributes;
use crate::io::geojson::FeatureCollection;
use std::fmt;

// Accessors paired with serialized names, in serialization order
const INDICATORS: [(&str, fn(&CellAttributes) -> f64); 7] = [
    ("E_PM", |cell| cell.e_pm),
    ("EPL_PM", |cell| cell.epl_pm),
    ("E_OZONE", |cell| cell.e_ozone),
    ("EPL_OZONE", |cell| cell.epl_ozone),
    ("EP_ASTHMA", |cell| cell.ep_asthma),
    ("SPL_SVM", |cell| cell.spl_svm),
    ("E_TOTPOP", |cell| cell.e_totpop),
];

/// Minimum, maximum, and mean of one indicator across a collection
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorStats {
    /// Serialized name of the indicator
    pub name: &'static str,
    /// Smallest observed value
    pub min: f64,
    /// Largest observed value
    pub max: f64,
    /// Arithmetic mean of observed values
    pub mean: f64,
}

/// Per-indicator statistics for a generated collection
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSummary {
    /// Number of cells summarized
    pub cell_count: usize,
    /// One entry per indicator, in serialization order
    pub indicators: Vec<IndicatorStats>,
}

impl CollectionSummary {
    /// Summarize every indicator of `collection`
    ///
    /// Returns `None` for an empty collection, where no statistics exist.
    pub fn from_collection(collection: &FeatureCollection) -> Option<Self> {
        if collection.is_empty() {
            return None;
        }

        let cell_count = collection.len();
        let count_f64 = cell_count as f64;

        let indicators = INDICATORS
            .into_iter()
            .map(|(name, accessor)| {
                let mut min = f64::INFINITY;
                let mut max = f64::NEG_INFINITY;
                let mut sum = 0.0;

                for feature in &collection.features {
                    let value = accessor(&feature.properties);
                    min = min.min(value);
                    max = max.max(value);
                    sum += value;
                }

                IndicatorStats {
                    name,
                    min,
                    max,
                    mean: sum / count_f64,
                }
            })
            .collect();

        Some(Self {
            cell_count,
            indicators,
        })
    }
}

impl fmt::Display for CollectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cells", self.cell_count)?;
        for stats in &self.indicators {
            write!(
                f,
                "\n  {:<9}  min {:>9.4}  max {:>9.4}  mean {:>9.4}",
                stats.name, stats.min, stats.max, stats.mean
            )?;
        }
        Ok(())
    }
}
