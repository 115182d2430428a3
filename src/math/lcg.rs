//! Seeded linear congruential noise source
//!
//! A deliberately small 32-bit generator: the goal is a reproducible stream
//! of plausible-looking noise, not statistical quality. One instance drives
//! one generation run and is never reset mid-run.

/// Multiplier of the classic 32-bit Numerical Recipes parameterization
pub const LCG_MULTIPLIER: u32 = 1_664_525;

/// Increment paired with [`LCG_MULTIPLIER`]
pub const LCG_INCREMENT: u32 = 1_013_904_223;

/// Deterministic 32-bit linear congruential sequence
///
/// Every draw advances the state exactly once, so the values observed by a
/// consumer are a pure function of the seed and the draw count.
#[derive(Debug, Clone)]
pub struct Lcg32 {
    state: u32,
}

impl Lcg32 {
    /// Create a sequence starting from `seed`
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance once and return a draw in `[0, 1]`
    ///
    /// The updated state is normalized against `u32::MAX`, matching the
    /// widespread `state / 0xFFFFFFFF` convention for this generator.
    pub const fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state as f64 / u32::MAX as f64
    }

    /// Advance once and return a draw remapped to `[-1, 1]`
    pub fn next_signed(&mut self) -> f64 {
        self.next_f64().mul_add(2.0, -1.0)
    }
}
