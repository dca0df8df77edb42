//! Deterministic simulation-level RNG wrapper.
//!
//! Randomness is only consumed while seeding the initial flock; the tick loop
//! itself is deterministic.  Wrapping `SmallRng` keeps every draw behind one
//! seed so a run can be replayed exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// A uniformly distributed `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen()
    }
}
