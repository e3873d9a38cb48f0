//! Secret word loaders
//!
//! Parsers for word list files (one word per line)

pub mod word_list;

pub use word_list::{WordList, DEFAULT_WORDS};
