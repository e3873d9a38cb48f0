//! Guess commands
//!
//! A `GuessCommand` is a validated "guess letter L" request that is detached
//! from where the letter came from. Building one never touches a round;
//! executing it consumes the command, so each command mutates a round at
//! most once.

use crate::core::Alphabet;
use crate::game::state::{GuessOutcome, RoundState};
use crate::game::Phase;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Record of one executed guess
///
/// A sequence of these is enough to reconstruct a round from its secret word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedGuess {
    pub letter: char,
    pub outcome: GuessOutcome,
    /// Phase of the round right after this guess
    pub phase: Phase,
    pub attempts_remaining: u8,
}

/// A single pending guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessCommand {
    letter: char,
}

impl GuessCommand {
    /// Build a command for `letter`, lowercased and checked against `alphabet`
    pub fn new(letter: char, alphabet: Alphabet) -> Result<Self> {
        let letter = alphabet.parse_letter(letter.encode_utf8(&mut [0; 4]))?;
        Ok(GuessCommand { letter })
    }

    /// Build a command from a raw line of player input
    pub fn parse(input: &str, alphabet: Alphabet) -> Result<Self> {
        let letter = alphabet.parse_letter(input)?;
        Ok(GuessCommand { letter })
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    /// Apply this guess to `state`
    ///
    /// Fails with `RoundOver` once the round is terminal, and with
    /// `InvalidLetter` if the command was built for a different alphabet.
    pub fn execute(self, state: &mut RoundState) -> Result<AppliedGuess> {
        let outcome = state.apply_guess(self.letter)?;
        Ok(AppliedGuess {
            letter: self.letter,
            outcome,
            phase: state.phase(),
            attempts_remaining: state.attempts_remaining(),
        })
    }
}

/// Apply a guessed letter to `state` in one step
pub fn apply_guess(state: &mut RoundState, letter: char) -> Result<AppliedGuess> {
    GuessCommand::new(letter, state.alphabet())?.execute(state)
}
