//! Round state
//!
//! `RoundState` owns everything that changes during a round and the rules
//! for changing it. It performs no I/O. The round loop and the presentation
//! layer only read it through accessors or a `RoundView`.

use crate::core::Alphabet;
use crate::game::Phase;
use crate::{HangmanError, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Attempts a player starts every round with
pub const MAX_ATTEMPTS: u8 = 6;

/// Number of rendering stages (0 = no damage, 6 = fully drawn figure)
pub const STAGE_COUNT: usize = MAX_ATTEMPTS as usize + 1;

/// Symbol shown for letters that have not been guessed yet
pub const PLACEHOLDER: char = '_';

/// Classification of a single applied guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Letter was guessed before; nothing changed
    AlreadyGuessed,
    /// Letter occurs in the secret word
    Hit,
    /// Letter does not occur in the secret word; one attempt was spent
    Miss,
}

/// Complete state of one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Lowercase secret word, fixed for the lifetime of the round
    secret_word: SmallVec<[char; 16]>,

    /// Letters guessed so far (only grows)
    guessed_letters: FxHashSet<char>,

    /// Remaining misses before the round is lost
    attempts_remaining: u8,

    phase: Phase,

    alphabet: Alphabet,
}

impl RoundState {
    /// Start a new round with the given secret word
    ///
    /// The word is lowercased. Empty words and words with characters outside
    /// `alphabet` are rejected with `InvalidWord` and no round is started.
    pub fn new(word: &str, alphabet: Alphabet) -> Result<Self> {
        let secret_word = alphabet.validate_word(word)?.chars().collect();
        Ok(RoundState {
            secret_word,
            guessed_letters: FxHashSet::default(),
            attempts_remaining: MAX_ATTEMPTS,
            phase: Phase::Playing,
            alphabet,
        })
    }

    /// Reset this state to a fresh round with a new secret word
    ///
    /// On error the current round is left untouched.
    pub fn reset(&mut self, word: &str) -> Result<()> {
        *self = RoundState::new(word, self.alphabet)?;
        Ok(())
    }

    /// The secret word
    pub fn secret_word(&self) -> String {
        self.secret_word.iter().collect()
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    /// Letters guessed so far, in dictionary order
    pub fn guessed_letters(&self) -> Vec<char> {
        let order = self.alphabet.letters();
        let mut letters: Vec<char> = self.guessed_letters.iter().copied().collect();
        letters.sort_by_key(|&ch| order.iter().position(|&l| l == ch));
        letters
    }

    /// Check whether `letter` has already been guessed (case-insensitive)
    pub fn has_guessed(&self, letter: char) -> bool {
        self.alphabet
            .normalize(letter)
            .is_some_and(|ch| self.guessed_letters.contains(&ch))
    }

    /// The secret word with unguessed letters replaced by `PLACEHOLDER`
    pub fn masked_view(&self) -> String {
        self.secret_word
            .iter()
            .map(|ch| {
                if self.guessed_letters.contains(ch) {
                    *ch
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    /// Check whether every letter of the secret word has been guessed
    pub fn is_complete(&self) -> bool {
        self.secret_word
            .iter()
            .all(|ch| self.guessed_letters.contains(ch))
    }

    /// Rendering stage derived from attempts lost, clamped to `0..STAGE_COUNT`
    pub fn stage_index(&self) -> usize {
        let lost = MAX_ATTEMPTS.saturating_sub(self.attempts_remaining) as usize;
        lost.min(STAGE_COUNT - 1)
    }

    /// Apply one guessed letter
    ///
    /// This is the only way round data changes. Outside `Playing` it is a
    /// no-op that returns `RoundOver`. Letters outside the round's alphabet
    /// return `InvalidLetter`. Upper-case letters are lowercased first.
    pub fn apply_guess(&mut self, letter: char) -> Result<GuessOutcome> {
        if self.phase.is_terminal() {
            return Err(HangmanError::RoundOver(self.phase));
        }

        let letter = self.alphabet.normalize(letter).ok_or_else(|| {
            HangmanError::InvalidLetter(format!(
                "'{letter}' is not in the {} alphabet",
                self.alphabet
            ))
        })?;

        if !self.guessed_letters.insert(letter) {
            return Ok(GuessOutcome::AlreadyGuessed);
        }

        let outcome = if self.secret_word.contains(&letter) {
            GuessOutcome::Hit
        } else {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            GuessOutcome::Miss
        };

        self.phase = self.phase.next(self.is_complete(), self.attempts_remaining);
        Ok(outcome)
    }
}
