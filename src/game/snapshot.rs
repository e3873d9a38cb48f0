//! Round snapshots for stop-and-resume play
//!
//! A snapshot is the round state, the guess history that produced it and,
//! optionally, the state of the guess source, stored as JSON.

use crate::game::state::RoundState;
use crate::history::GuessHistory;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Guess source state that can be preserved across snapshot/resume
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "guesser_type")]
pub enum GuesserState {
    /// Scripted guesser with its position in the script
    Scripted(crate::game::ScriptedGuesser),

    /// Random guesser with its own RNG state
    Random(crate::game::RandomGuesser),
    // Interactive guessers have no state to preserve
}

/// A saved round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub state: RoundState,

    /// Guesses applied so far, in order
    pub history: GuessHistory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guesser: Option<GuesserState>,
}

impl RoundSnapshot {
    pub fn new(state: RoundState, history: GuessHistory) -> Self {
        RoundSnapshot {
            state,
            history,
            guesser: None,
        }
    }

    pub fn with_guesser(mut self, guesser: GuesserState) -> Self {
        self.guesser = Some(guesser);
        self
    }

    /// Check that replaying the history on the secret word reproduces the state
    pub fn is_consistent(&self) -> bool {
        self.history
            .replay(&self.state.secret_word(), self.state.alphabet())
            .is_ok_and(|replayed| replayed == self.state)
    }

    /// Save this snapshot to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationError(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| SnapshotError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load a snapshot from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let json =
            std::fs::read_to_string(path).map_err(|e| SnapshotError::IoError(e.to_string()))?;
        let snapshot: Self = serde_json::from_str(&json)
            .map_err(|e| SnapshotError::DeserializationError(e.to_string()))?;
        Ok(snapshot)
    }
}

/// Errors that can occur during snapshot operations
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<SnapshotError> for crate::HangmanError {
    fn from(e: SnapshotError) -> Self {
        crate::HangmanError::SerializationError(e.to_string())
    }
}
