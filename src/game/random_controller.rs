//! Random guess source for simulations and baseline play
//!
//! Picks uniformly among the letters that have not been guessed yet, so it
//! never wastes a turn on a repeat.

use crate::game::controller::{GuessSource, RoundView};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};

/// A guess source that makes random choices
///
/// The RNG state is serializable, so a resumed round continues with the same
/// sequence of choices it would have made without the interruption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomGuesser {
    rng: ChaCha12Rng,
}

impl RandomGuesser {
    /// Create a random guesser seeded from OS entropy
    pub fn new() -> Self {
        RandomGuesser {
            rng: ChaCha12Rng::from_entropy(),
        }
    }

    /// Create a random guesser with a fixed seed (for deterministic testing)
    pub fn with_seed(seed: u64) -> Self {
        RandomGuesser {
            rng: ChaCha12Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGuesser {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessSource for RandomGuesser {
    fn name(&self) -> &str {
        "random"
    }

    fn next_guess(&mut self, view: &RoundView) -> Option<char> {
        // Out of letters means there is nothing left to try
        view.unguessed_letters().choose(&mut self.rng).copied()
    }
}
