//! Synthesized per-cell indicator attributes
//!
//! Each cell gets seven indicator values built from its center position
//! plus three pseudo-random draws: smooth coast-to-coast gradients and
//! latitude bands give the fields spatial structure, the draws give them
//! local variation, and every value is rounded and clamped into a
//! plausible published range.

use crate::io::configuration::{ASTHMA_RANGE, OZONE_RANGE, PM_RANGE, SVM_RANGE, TOTPOP_RANGE};
use crate::math::lcg::Lcg32;
use crate::math::rounding::round_to;
use serde::{Deserialize, Serialize};

/// Synthesized environmental and demographic indicators for one cell
///
/// Fields serialize under the uppercase names downstream map styling
/// keys on (`E_PM`, `EPL_PM`, ...); `hex_id` stays lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct CellAttributes {
    /// Zero-based cell index in grid enumeration order
    #[serde(rename = "hex_id")]
    pub hex_id: u32,
    /// Fine particulate concentration (µg/m³)
    pub e_pm: f64,
    /// Percentile rank of the particulate value, in `[0, 1]`
    pub epl_pm: f64,
    /// Ozone concentration
    pub e_ozone: f64,
    /// Percentile rank of the ozone value, in `[0, 1]`
    pub epl_ozone: f64,
    /// Adult asthma prevalence (percent)
    pub ep_asthma: f64,
    /// Composite social vulnerability score
    pub spl_svm: f64,
    /// Resident population estimate
    pub e_totpop: f64,
}

impl CellAttributes {
    /// Synthesize the attribute set for the cell centered at `center`
    ///
    /// Takes exactly three draws from `noise`, so calling this once per
    /// cell in enumeration order keeps the whole grid reproducible from
    /// a single seed. `center` is `[longitude, latitude]` in degrees.
    pub fn synthesize(hex_id: u32, center: [f64; 2], noise: &mut Lcg32) -> Self {
        let lon = center[0];
        let lat = center[1];

        let n1 = noise.next_signed();
        let n2 = noise.next_signed();
        let n3 = noise.next_signed();

        // Rises west of the -70 meridian, ~1.0 at the Pacific coast
        let east_gradient = (-lon - 70.0) / 55.0;
        // Diagonal banding shared by the pollution fields
        let banding = ((lat + lon) / 10.0).cos();

        let pm_raw = n1.mul_add(1.5, banding.mul_add(0.8, east_gradient.mul_add(2.2, 6.5)));
        let e_pm = clamp_to(round_to(pm_raw, 2), PM_RANGE);

        let pm_fraction = (e_pm - PM_RANGE.0) / (PM_RANGE.1 - PM_RANGE.0);
        let epl_pm = round_to(n2.mul_add(0.1, pm_fraction).clamp(0.0, 1.0), 4);

        let ozone_raw = n1.mul_add(0.2, banding.mul_add(0.3, east_gradient.mul_add(0.4, 0.02)));
        let e_ozone = clamp_to(round_to(ozone_raw, 2), OZONE_RANGE);

        let ozone_fraction = e_ozone / OZONE_RANGE.1;
        let epl_ozone = round_to(n2.mul_add(0.1, ozone_fraction).clamp(0.0, 1.0), 4);

        // Prevalence tracks the particulate level plus a humidity band
        let humidity_band = ((lat + 20.0) / 7.0).sin();
        let asthma_raw = n2.mul_add(1.2, humidity_band.mul_add(2.0, e_pm.mul_add(0.8, 5.5)));
        let ep_asthma = clamp_to(round_to(asthma_raw, 1), ASTHMA_RANGE);

        // Vulnerability peaks along a southeastern latitude band and a
        // corridor around the -90 meridian
        let se_band = ((35.0 - (lat - 33.0).abs()) / 20.0).max(0.0);
        let corridor = ((15.0 - (lon + 90.0).abs()) / 15.0).max(0.0);
        let svm_raw = n3.mul_add(1.5, corridor.mul_add(2.0, se_band.mul_add(2.5, 4.5)));
        let spl_svm = clamp_to(round_to(svm_raw, 3), SVM_RANGE);

        // Population concentrates in sun-belt and northeastern latitude
        // bands crossed by the Atlantic and Pacific coastal corridors
        let sun_belt = gaussian_bump(lat, 34.0, 9.0);
        let northeast = gaussian_bump(lat, 40.0, 6.0);
        let atlantic = gaussian_bump(lon, -73.0, 5.0);
        let pacific = gaussian_bump(lon, -118.0, 5.0);
        let totpop_raw = n1.mul_add(
            80.0,
            pacific.mul_add(
                180.0,
                atlantic.mul_add(260.0, northeast.mul_add(200.0, sun_belt.mul_add(220.0, 150.0))),
            ),
        );
        let e_totpop = clamp_to(round_to(totpop_raw, 1), TOTPOP_RANGE);

        Self {
            hex_id,
            e_pm,
            epl_pm,
            e_ozone,
            epl_ozone,
            ep_asthma,
            spl_svm,
            e_totpop,
        }
    }
}

// Unnormalized bell curve around `center`, width in degrees
fn gaussian_bump(coordinate: f64, center: f64, width: f64) -> f64 {
    (-((coordinate - center) / width).powi(2)).exp()
}

const fn clamp_to(value: f64, range: (f64, f64)) -> f64 {
    value.clamp(range.0, range.1)
}
