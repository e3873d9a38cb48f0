//! Hangman - a turn-based letter guessing engine
//!
//! The engine tracks one round at a time: the secret word, the letters guessed
//! so far, the remaining attempts and the round phase. Guesses come from a
//! pluggable guess source (scripted, random or interactive) and the outcome of
//! every guess is reported back for a presentation layer to render.

pub mod core;
pub mod game;
pub mod history;
pub mod loader;
pub mod error;

pub use error::{HangmanError, Result};
