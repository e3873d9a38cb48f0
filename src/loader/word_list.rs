//! Word list loader
//!
//! Word list files hold one secret word per line. Blank lines and lines
//! starting with `#` are skipped. Every word is validated against the
//! alphabet at load time, so a round never starts with a bad word.

use crate::core::Alphabet;
use crate::{HangmanError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::path::Path;

/// Words used when no list is supplied
pub const DEFAULT_WORDS: [&str; 5] = ["джава", "игра", "виселица", "программа", "коленкор"];

/// Validated list of candidate secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    alphabet: Alphabet,
}

impl WordList {
    /// The built-in Russian word list
    pub fn builtin() -> Self {
        WordList {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            alphabet: Alphabet::Russian,
        }
    }

    /// Build a list from words, lowercasing and validating each one
    pub fn new<S: AsRef<str>>(words: &[S], alphabet: Alphabet) -> Result<Self> {
        let words = words
            .iter()
            .map(|w| alphabet.validate_word(w.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| HangmanError::InvalidWordList(e.to_string()))?;

        if words.is_empty() {
            return Err(HangmanError::InvalidWordList("no words".to_string()));
        }
        Ok(WordList { words, alphabet })
    }

    /// Parse a word list from its text content
    pub fn parse(content: &str, alphabet: Alphabet) -> Result<Self> {
        let words: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        Self::new(&words, alphabet)
    }

    /// Load a word list from a file
    pub fn load_from_file(path: &Path, alphabet: Alphabet) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, alphabet)
    }

    /// Load a word list from a file without blocking the runtime
    pub async fn load_from_file_async(path: &Path, alphabet: Alphabet) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::parse(&content, alphabet)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a secret word
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Lists are never empty, see `new`
        self.words
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::builtin()
    }
}
