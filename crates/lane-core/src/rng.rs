//! Deterministic RNG wrapper for synthetic input generation.
//!
//! # Determinism strategy
//!
//! The simulation core itself never draws random numbers — identical input
//! always produces identical output.  Randomness only enters when a synthetic
//! arrival stream is generated for demos or tests.  `SimRng` wraps a seeded
//! `SmallRng` so the same seed always produces the same stream, keeping
//! generated fixtures reproducible.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Seeded simulation-level RNG.
///
/// Used only in single-threaded contexts; the engine has no concurrent
/// callers by design.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
