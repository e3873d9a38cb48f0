//! Core types shared across the engine

pub mod alphabet;

pub use alphabet::Alphabet;
