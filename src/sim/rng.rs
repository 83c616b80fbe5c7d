//! Seeded random number source
//!
//! Every random draw in the simulation goes through `GameRng` so a run can be
//! replayed from its seed alone. Ranges are inclusive on both ends.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Deterministic RNG stream for one session
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    rng: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this stream was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn i64(&mut self, start: i64, end: i64) -> i64 {
        self.rng.random_range(start..=end)
    }

    pub fn i32(&mut self, start: i32, end: i32) -> i32 {
        self.rng.random_range(start..=end)
    }

    pub fn f32(&mut self, start: f32, end: f32) -> f32 {
        self.rng.random_range(start..=end)
    }

    pub fn f64(&mut self, start: f64, end: f64) -> f64 {
        self.rng.random_range(start..=end)
    }
}
