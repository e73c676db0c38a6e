//! Deterministic chance sampling.
//!
//! The engine itself never rolls dice: chance nodes publish their exact
//! distribution and a caller picks the outcome. `GameRng` is the sampler
//! used by playouts, tests and benches.
//!
//! ```
//! use qwinto::core::{Action, GameRng};
//!
//! let outcomes = [(Action::new(1), 0.5), (Action::new(2), 0.5)];
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.sample_outcome(&outcomes), b.sample_outcome(&outcomes));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::action::Action;

/// Deterministic RNG with forking for independent simulation branches.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
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

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Sample one outcome from a weighted outcome list.
    ///
    /// Weights do not need to sum to 1.0. Returns `None` if the list is
    /// empty or all weights are zero.
    pub fn sample_outcome(&mut self, outcomes: &[(Action, f64)]) -> Option<Action> {
        let total: f64 = outcomes.iter().map(|(_, w)| w).sum();
        if outcomes.is_empty() || total <= 0.0 {
            return None;
        }

        let mut threshold = self.inner.gen::<f64>() * total;

        for &(action, weight) in outcomes {
            threshold -= weight;
            if threshold <= 0.0 && weight > 0.0 {
                return Some(action);
            }
        }

        // Floating point edge case - return last non-zero weight
        outcomes
            .iter()
            .rev()
            .find(|(_, w)| *w > 0.0)
            .map(|&(a, _)| a)
    }
}
