//! Guess history for replaying rounds
//!
//! Every executed guess is recorded as an `AppliedGuess`. The history is
//! enough to rebuild a round from its secret word, which is how snapshots
//! are verified and how a round can be re-run for debugging.

use crate::core::Alphabet;
use crate::game::actions::{apply_guess, AppliedGuess};
use crate::game::state::{GuessOutcome, RoundState};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Ordered log of applied guesses for one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessHistory {
    /// Applied guesses (most recent at end)
    entries: Vec<AppliedGuess>,

    /// Is recording enabled? (disabled for simulations)
    enabled: bool,
}

impl GuessHistory {
    pub fn new() -> Self {
        GuessHistory {
            entries: Vec::new(),
            enabled: true,
        }
    }

    /// Create a history that records nothing
    pub fn disabled() -> Self {
        GuessHistory {
            entries: Vec::new(),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record an applied guess
    pub fn log(&mut self, applied: AppliedGuess) {
        if self.enabled {
            self.entries.push(applied);
        }
    }

    /// Get the most recent guess without removing it
    pub fn peek(&self) -> Option<&AppliedGuess> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[AppliedGuess] {
        &self.entries
    }

    /// Letters in the order they were guessed, repeats included
    pub fn letters(&self) -> Vec<char> {
        self.entries.iter().map(|e| e.letter).collect()
    }

    /// Count guesses with the given outcome
    pub fn count(&self, outcome: GuessOutcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }

    /// Rebuild a round by re-applying every recorded letter to a fresh round
    pub fn replay(&self, word: &str, alphabet: Alphabet) -> Result<RoundState> {
        let mut state = RoundState::new(word, alphabet)?;
        for entry in &self.entries {
            apply_guess(&mut state, entry.letter)?;
        }
        Ok(state)
    }
}

impl Default for GuessHistory {
    fn default() -> Self {
        Self::new()
    }
}
