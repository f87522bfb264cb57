//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical deal sequence
//! - **Forkable**: Each deal draws from its own independent stream
//!
//! ```
//! use klondike_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deal_rng = rng.fork();
//!
//! let mut rng2 = GameRng::new(42);
//! let mut deal_rng2 = rng2.fork();
//!
//! // Same seed, same fork counter: same stream
//! assert_eq!(deal_rng.next_id(), deal_rng2.next_id());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for shuffling and identity tokens.
///
/// Uses ChaCha8 for speed while keeping cryptographic-quality output, so a
/// Fisher-Yates shuffle over it gives every ordering of the deck with equal
/// probability.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a 64-bit token (game identities).
    pub fn next_id(&mut self) -> u64 {
        self.inner.gen()
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
