//! Fixed-decimal rounding for presentation-grade indicator values

/// Round `value` to `decimals` fractional digits, half away from zero
///
/// Synthetic indicators are truncated to coarse precision on purpose: the
/// extra digits carry no information and only bloat serialized output.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
