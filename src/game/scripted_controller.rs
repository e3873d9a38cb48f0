//! Scripted guess source for testing and replays
//!
//! This source plays a predetermined sequence of letters. Once the script is
//! exhausted it quits, which abandons the round if it is still in progress.

use crate::core::Alphabet;
use crate::game::controller::{GuessSource, RoundView};
use crate::{HangmanError, Result};
use serde::{Deserialize, Serialize};

/// A guess source that follows a fixed list of letters
///
/// Serializable so its position survives a snapshot/resume cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedGuesser {
    script: Vec<char>,
    /// Current position in the script
    pub current_index: usize,
}

impl ScriptedGuesser {
    pub fn new(script: Vec<char>) -> Self {
        ScriptedGuesser {
            script,
            current_index: 0,
        }
    }

    /// Parse a script of comma or space separated letters, e.g. "и,г р а"
    ///
    /// Every entry must be a single letter of `alphabet`.
    pub fn parse_script(input: &str, alphabet: Alphabet) -> Result<Self> {
        let script = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| {
                alphabet
                    .parse_letter(s)
                    .map_err(|e| HangmanError::ParseError(format!("bad script entry: {e}")))
            })
            .collect::<Result<Vec<char>>>()?;
        Ok(ScriptedGuesser::new(script))
    }

    /// Letters not yet played
    pub fn remaining(&self) -> &[char] {
        &self.script[self.current_index.min(self.script.len())..]
    }
}

impl GuessSource for ScriptedGuesser {
    fn name(&self) -> &str {
        "scripted"
    }

    fn next_guess(&mut self, _view: &RoundView) -> Option<char> {
        let letter = self.script.get(self.current_index).copied()?;
        self.current_index += 1;
        Some(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::RoundState;

    #[test]
    fn test_scripted_guesser() {
        let state = RoundState::new("игра", Alphabet::Russian).unwrap();
        let view = RoundView::new(&state);

        let mut guesser = ScriptedGuesser::new(vec!['и', 'г']);
        assert_eq!(guesser.next_guess(&view), Some('и'));
        assert_eq!(guesser.remaining(), &['г']);
        assert_eq!(guesser.next_guess(&view), Some('г'));

        // No more scripted letters
        assert_eq!(guesser.next_guess(&view), None);
        assert_eq!(guesser.next_guess(&view), None);
    }

    #[test]
    fn test_parse_script() {
        let guesser = ScriptedGuesser::parse_script("И, г  р,а", Alphabet::Russian).unwrap();
        assert_eq!(guesser.remaining(), &['и', 'г', 'р', 'а']);

        assert!(ScriptedGuesser::parse_script("", Alphabet::Russian)
            .unwrap()
            .remaining()
            .is_empty());
        assert!(matches!(
            ScriptedGuesser::parse_script("и,гр", Alphabet::Russian),
            Err(HangmanError::ParseError(_))
        ));
    }
}
