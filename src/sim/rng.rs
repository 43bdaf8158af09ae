//! RNG service for spawn and fragmentation draws
//!
//! Thin wrapper over a seedable PCG generator. One instance is shared across
//! all random draws in a session; the sequence only needs to progress
//! consistently, cross-platform reproducibility is not a requirement.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

#[derive(Debug, Clone)]
pub struct GameRng {
    rng: Pcg32,
}

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform draw in [lo, hi)
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        self.rng.random_range(lo..hi)
    }

    /// Uniform draw in [-1, 1)
    pub fn signed_unit(&mut self) -> f32 {
        self.rng.random_range(-1.0..1.0)
    }

    /// Uniform heading in [0, 2π)
    pub fn angle(&mut self) -> f32 {
        self.rng.random_range(0.0..std::f32::consts::TAU)
    }
}
