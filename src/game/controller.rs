//! Guess source trait and round view
//!
//! This module defines the interface between the round loop and whatever
//! supplies letters (a human at a terminal, a script, a random bot). The
//! loop asks the source for one letter per turn, and the source inspects a
//! read-only view of the round to decide.

use crate::core::Alphabet;
use crate::game::actions::AppliedGuess;
use crate::game::state::RoundState;
use crate::game::Phase;
use crate::HangmanError;

/// Read-only view of a round for guess sources and renderers
///
/// The secret word is only visible once the round is over.
#[derive(Clone, Copy)]
pub struct RoundView<'a> {
    state: &'a RoundState,
}

impl<'a> RoundView<'a> {
    pub fn new(state: &'a RoundState) -> Self {
        RoundView { state }
    }

    pub fn masked_view(&self) -> String {
        self.state.masked_view()
    }

    pub fn attempts_remaining(&self) -> u8 {
        self.state.attempts_remaining()
    }

    pub fn stage_index(&self) -> usize {
        self.state.stage_index()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn alphabet(&self) -> Alphabet {
        self.state.alphabet()
    }

    pub fn guessed_letters(&self) -> Vec<char> {
        self.state.guessed_letters()
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.state.has_guessed(letter)
    }

    /// Alphabet letters that have not been guessed yet
    pub fn unguessed_letters(&self) -> Vec<char> {
        self.alphabet()
            .letters()
            .into_iter()
            .filter(|&ch| !self.has_guessed(ch))
            .collect()
    }

    /// The secret word, once the round has ended
    pub fn revealed_word(&self) -> Option<String> {
        self.phase()
            .is_terminal()
            .then(|| self.state.secret_word())
    }
}

/// Source of guessed letters
///
/// Implement this trait to drive a round from a new kind of input.
/// The round loop calls these methods once per turn.
pub trait GuessSource {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Choose the next letter to guess
    ///
    /// Return `None` to abandon the round (player quit, script exhausted).
    fn next_guess(&mut self, view: &RoundView) -> Option<char>;

    /// Called after a guess has been applied (for feedback/logging)
    fn on_guess_applied(&mut self, _view: &RoundView, _applied: &AppliedGuess) {}

    /// Called when the round refuses a letter this source returned
    fn on_guess_rejected(&mut self, _view: &RoundView, _error: &HangmanError) {}

    /// Called when the round reaches a terminal phase
    fn on_round_end(&mut self, _view: &RoundView, _phase: Phase) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_hides_word_while_playing() {
        let mut state = RoundState::new("а", Alphabet::Russian).unwrap();
        assert_eq!(RoundView::new(&state).revealed_word(), None);

        state.apply_guess('а').unwrap();
        let view = RoundView::new(&state);
        assert_eq!(view.revealed_word(), Some("а".to_string()));
    }

    #[test]
    fn test_unguessed_letters() {
        let mut state = RoundState::new("ab", Alphabet::English).unwrap();
        state.apply_guess('a').unwrap();
        state.apply_guess('z').unwrap();

        let unguessed = RoundView::new(&state).unguessed_letters();
        assert_eq!(unguessed.len(), 24);
        assert!(!unguessed.contains(&'a'));
        assert!(!unguessed.contains(&'z'));
        assert!(unguessed.contains(&'b'));
    }
}
