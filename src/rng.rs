//! RNG module - seedable tile randomness
//!
//! Wraps a ChaCha8 generator so that a fixed seed reproduces the exact
//! spawn sequence: same seed, same moves, same boards. The engine draws
//! from this and nothing else, which keeps whole games replayable.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::SPAWN_ODDS;

/// Deterministic source for tile placement and tile values
#[derive(Debug, Clone)]
pub struct TileRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl TileRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with (for snapshots and replays)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index into a collection of `len` items
    pub fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Value for a freshly spawned tile: 2 nine times out of ten, otherwise 4
    pub fn spawn_value(&mut self) -> u32 {
        if self.inner.gen_range(0..SPAWN_ODDS) == 0 {
            4
        } else {
            2
        }
    }
}

impl Default for TileRng {
    fn default() -> Self {
        Self::new(1)
    }
}
