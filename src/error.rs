//! Error types for the hangman engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HangmanError {
    #[error("Invalid secret word: {0}")]
    InvalidWord(String),

    #[error("Invalid letter: {0}")]
    InvalidLetter(String),

    #[error("Round is already over ({0})")]
    RoundOver(crate::game::Phase),

    #[error("Invalid word list: {0}")]
    InvalidWordList(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, HangmanError>;
