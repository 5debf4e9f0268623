// Random number sources for numeric decoration

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Largest number drawn for numeric decoration (inclusive).
pub const MAX_DECORATION: u32 = 99;

/// Supplier of decoration numbers.
///
/// Each call to [`draw`](NumberSource::draw) returns one integer in
/// `0..=MAX_DECORATION`. The word strategy draws exactly once per
/// generation.
pub trait NumberSource {
    fn draw(&mut self) -> u32;
}

/// Unseeded source backed by the thread-local generator.
///
/// Every generation may differ; this is the default.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl NumberSource for ThreadRngSource {
    fn draw(&mut self) -> u32 {
        rand::thread_rng().gen_range(0..=MAX_DECORATION)
    }
}

/// Deterministic source seeded from a `u64`, for reproducible runs.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl NumberSource for SeededSource {
    fn draw(&mut self) -> u32 {
        self.rng.gen_range(0..=MAX_DECORATION)
    }
}

/// Source that always returns the same number, clamped to
/// `MAX_DECORATION`. Intended for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSource(pub u32);

impl NumberSource for FixedSource {
    fn draw(&mut self) -> u32 {
        self.0.min(MAX_DECORATION)
    }
}
