//! The single source of randomness for the battle engine.
//!
//! Everything that rolls dice (accuracy checks, the automated side's attack,
//! the opponent pick) takes a `&mut dyn RandomSource`, so tests can swap in a
//! [`ScriptedRandom`] and get fully deterministic battles.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

/// Supplies uniformly distributed integers.
pub trait RandomSource {
    /// Returns a value in `[min_inclusive, max_exclusive)`.
    ///
    /// # Panics
    /// Implementations panic if `min_inclusive >= max_exclusive`.
    fn next_int(&mut self, min_inclusive: u32, max_exclusive: u32) -> u32;
}

/// Production randomness backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn next_int(&mut self, min_inclusive: u32, max_exclusive: u32) -> u32 {
        assert!(
            min_inclusive < max_exclusive,
            "empty range [{}, {})",
            min_inclusive,
            max_exclusive
        );
        let value = self.rng.random_range(min_inclusive..max_exclusive);
        trace!(value, min_inclusive, max_exclusive, "rng draw");
        value
    }
}

/// Replays a fixed list of outcomes, in order.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    outcomes: Vec<u32>,
    index: usize,
}

impl ScriptedRandom {
    pub fn new(outcomes: Vec<u32>) -> Self {
        Self { outcomes, index: 0 }
    }

    /// Number of values handed out so far.
    pub fn consumed(&self) -> usize {
        self.index
    }

    /// Number of values still queued.
    pub fn remaining(&self) -> usize {
        self.outcomes.len() - self.index
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, min_inclusive: u32, max_exclusive: u32) -> u32 {
        assert!(
            min_inclusive < max_exclusive,
            "empty range [{}, {})",
            min_inclusive,
            max_exclusive
        );
        let Some(&outcome) = self.outcomes.get(self.index) else {
            panic!(
                "ScriptedRandom exhausted after {} values! Tried to draw from [{}, {}).",
                self.index, min_inclusive, max_exclusive
            );
        };
        assert!(
            (min_inclusive..max_exclusive).contains(&outcome),
            "scripted value {} is outside [{}, {})",
            outcome,
            min_inclusive,
            max_exclusive
        );

        #[cfg(test)]
        println!("[RNG] Consumed {} from [{}, {})", outcome, min_inclusive, max_exclusive);

        self.index += 1;
        outcome
    }
}
