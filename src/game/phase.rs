//! Round phases

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle position of a round
///
/// `Playing` is the only non-terminal phase. `Won` and `Lost` are absorbing:
/// once a round reaches one of them it never leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Phase {
    /// Check whether the round is over
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Playing)
    }

    /// Compute the phase from round data
    ///
    /// A completed word wins even if it was completed on the last attempt.
    pub fn resolve(is_complete: bool, attempts_remaining: u8) -> Phase {
        if is_complete {
            Phase::Won
        } else if attempts_remaining == 0 {
            Phase::Lost
        } else {
            Phase::Playing
        }
    }

    /// Pure transition: terminal phases absorb, `Playing` resolves from data
    pub fn next(self, is_complete: bool, attempts_remaining: u8) -> Phase {
        if self.is_terminal() {
            self
        } else {
            Phase::resolve(is_complete, attempts_remaining)
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Playing => write!(f, "playing"),
            Phase::Won => write!(f, "won"),
            Phase::Lost => write!(f, "lost"),
        }
    }
}
