//! Deterministic simulation RNG.
//!
//! All randomized behavior (passenger churn, speed jitter, notification
//! deltas) draws from one `SimRng` seeded from a `u64`, so the same seed
//! always produces an identical run.  The simulation is single-threaded by
//! construction; no synchronisation is needed.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Seedable RNG for the simulation loop.
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
        use rand::Rng;
        self.0.gen_range(range)
    }
}
