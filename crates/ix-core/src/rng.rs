//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The whole run draws from a single `SmallRng` seeded from the parameter
//! file's seed.  The engine consumes draws at exactly two points: when it
//! schedules the next arrival for a direction, and when it decides whether a
//! queued vehicle runs a yellow light.  Because the engine is single-threaded
//! and processes events in a fixed order, the same seed and parameters always
//! reproduce the same event sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Re-seed in place, discarding the current stream.
    pub fn reseed(&mut self, seed: u64) {
        self.0 = SmallRng::seed_from_u64(seed);
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    ///
    /// # Panics
    /// Panics if `min > max`.
    #[inline]
    pub fn uniform_in_range(&mut self, min: i64, max: i64) -> i64 {
        self.0.gen_range(min..=max)
    }

    /// Normally distributed integer around `mean`, clamped at zero.
    ///
    /// Uses the Box–Muller transform and rounds to the nearest integer.  With
    /// `std_dev == 0` the result is exactly `mean` and no draw is consumed.
    pub fn positive_normal(&mut self, mean: u64, std_dev: u64) -> u64 {
        if std_dev == 0 {
            return mean;
        }
        // 1 - U maps [0, 1) onto (0, 1] so ln() never sees zero.
        let u1: f64 = 1.0 - self.0.r#gen::<f64>();
        let u2: f64 = self.0.r#gen::<f64>();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        let value = (mean as f64 + std_dev as f64 * z).round();
        if value <= 0.0 { 0 } else { value as u64 }
    }
}
