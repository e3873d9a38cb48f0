//! Game alphabets and input validation
//!
//! The alphabet is the boundary between raw player input and the engine.
//! Everything that reaches a round has already been normalized to a
//! lowercase letter of the round's alphabet.

use crate::{HangmanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Set of letters a round is played with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alphabet {
    /// Cyrillic а-я plus ё
    #[default]
    Russian,
    /// Latin a-z
    English,
}

impl Alphabet {
    /// Check whether `ch` belongs to this alphabet (case-insensitive)
    pub fn contains(&self, ch: char) -> bool {
        self.normalize(ch).is_some()
    }

    /// Lowercase `ch` and return it if it belongs to this alphabet
    pub fn normalize(&self, ch: char) -> Option<char> {
        let mut lower = ch.to_lowercase();
        let ch = match (lower.next(), lower.next()) {
            (Some(c), None) => c,
            _ => return None,
        };

        let valid = match self {
            Alphabet::Russian => ('а'..='я').contains(&ch) || ch == 'ё',
            Alphabet::English => ch.is_ascii_lowercase(),
        };
        valid.then_some(ch)
    }

    /// All letters of the alphabet in dictionary order
    pub fn letters(&self) -> Vec<char> {
        match self {
            Alphabet::Russian => ('а'..='е')
                .chain(std::iter::once('ё'))
                .chain('ж'..='я')
                .collect(),
            Alphabet::English => ('a'..='z').collect(),
        }
    }

    /// Parse one line of player input into a single normalized letter
    ///
    /// Surrounding whitespace is ignored. Anything other than exactly one
    /// letter from this alphabet is rejected with `InvalidLetter`.
    pub fn parse_letter(&self, input: &str) -> Result<char> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.normalize(ch).ok_or_else(|| {
                HangmanError::InvalidLetter(format!("'{ch}' is not in the {self} alphabet"))
            }),
            (None, _) => Err(HangmanError::InvalidLetter("empty input".to_string())),
            _ => Err(HangmanError::InvalidLetter(format!(
                "expected a single letter, got '{trimmed}'"
            ))),
        }
    }

    /// Normalize a secret word, rejecting empty words and foreign characters
    pub fn validate_word(&self, word: &str) -> Result<String> {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return Err(HangmanError::InvalidWord("word is empty".to_string()));
        }

        trimmed
            .chars()
            .map(|ch| {
                self.normalize(ch).ok_or_else(|| {
                    HangmanError::InvalidWord(format!(
                        "'{trimmed}' contains '{ch}', which is not in the {self} alphabet"
                    ))
                })
            })
            .collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Russian => write!(f, "russian"),
            Alphabet::English => write!(f, "english"),
        }
    }
}

impl FromStr for Alphabet {
    type Err = HangmanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "russian" | "ru" => Ok(Alphabet::Russian),
            "english" | "en" => Ok(Alphabet::English),
            _ => Err(HangmanError::ParseError(format!(
                "unknown alphabet '{s}' (expected: russian/ru, english/en)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_russian_letters() {
        let letters = Alphabet::Russian.letters();
        assert_eq!(letters.len(), 33);
        assert_eq!(letters[0], 'а');
        assert_eq!(letters[6], 'ё');
        assert_eq!(letters[32], 'я');
    }

    #[test]
    fn test_english_letters() {
        assert_eq!(Alphabet::English.letters().len(), 26);
    }

    #[test]
    fn test_normalize_uppercase() {
        assert_eq!(Alphabet::Russian.normalize('И'), Some('и'));
        assert_eq!(Alphabet::Russian.normalize('Ё'), Some('ё'));
        assert_eq!(Alphabet::English.normalize('Q'), Some('q'));
    }

    #[test]
    fn test_foreign_letters_rejected() {
        assert!(!Alphabet::Russian.contains('a'));
        assert!(!Alphabet::English.contains('а'));
        assert!(!Alphabet::Russian.contains('1'));
        assert!(!Alphabet::English.contains(' '));
    }

    #[test]
    fn test_parse_letter() {
        assert_eq!(Alphabet::Russian.parse_letter(" Г \n").unwrap(), 'г');
        assert!(matches!(
            Alphabet::Russian.parse_letter(""),
            Err(HangmanError::InvalidLetter(_))
        ));
        assert!(matches!(
            Alphabet::Russian.parse_letter("аб"),
            Err(HangmanError::InvalidLetter(_))
        ));
        assert!(matches!(
            Alphabet::Russian.parse_letter("z"),
            Err(HangmanError::InvalidLetter(_))
        ));
    }

    #[test]
    fn test_validate_word() {
        assert_eq!(Alphabet::Russian.validate_word("Игра").unwrap(), "игра");
        assert!(matches!(
            Alphabet::Russian.validate_word("   "),
            Err(HangmanError::InvalidWord(_))
        ));
        assert!(matches!(
            Alphabet::Russian.validate_word("игра1"),
            Err(HangmanError::InvalidWord(_))
        ));
        assert!(matches!(
            Alphabet::English.validate_word("two words"),
            Err(HangmanError::InvalidWord(_))
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("RU".parse::<Alphabet>().unwrap(), Alphabet::Russian);
        assert_eq!("english".parse::<Alphabet>().unwrap(), Alphabet::English);
        assert!("klingon".parse::<Alphabet>().is_err());
    }
}
