// src/maps/random.rs
//! Integer random source handed to the map generators.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of integers in a half-open range.
pub trait RandomRange {
    /// Returns a value uniformly drawn from `[min, max)`. When the range is
    /// empty (`max <= min`) the result is `min`.
    fn int(&mut self, min: i32, max: i32) -> i32;
}

/// [`RandomRange`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct SaneRandomGenerator<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> SaneRandomGenerator<R> {
    pub fn new(rng: R) -> Self {
        SaneRandomGenerator { rng }
    }
}

impl SaneRandomGenerator<StdRng> {
    /// Deterministic generator, for reproducible maps.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomRange for SaneRandomGenerator<R> {
    fn int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..max)
    }
}
