//! Deterministic random number generation.
//!
//! Every game captures a single `u64` seed when it starts. The deck order is
//! a pure function of that seed, so any session can be reproduced exactly
//! from its seed and action history.
//!
//! ```
//! use scoundrel::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut x = vec![1, 2, 3, 4, 5];
//! let mut y = x.clone();
//! a.shuffle(&mut x);
//! b.shuffle(&mut y);
//! assert_eq!(x, y);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG.
///
/// Uses ChaCha8 for speed and a reproducible stream across platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a fresh seed for a derived stream (e.g. the next game).
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen()
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
