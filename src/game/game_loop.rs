//! Round loop implementation
//!
//! Pulls one letter per turn from a guess source, applies it as a
//! `GuessCommand` and stops polling as soon as the round is terminal.

/// Macro for conditional logging that avoids allocation when feature is disabled
///
/// When verbose-logging feature is disabled, this becomes a no-op at compile time,
/// eliminating the per-turn format! allocations.
macro_rules! log_if_verbose {
    ($self:expr, $($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            $self.logger.guess(&format!($($arg)*));
        }
        #[cfg(not(feature = "verbose-logging"))]
        {
            let _ = &$self; // Suppress unused variable warning
        }
    };
}

use crate::game::actions::GuessCommand;
use crate::game::controller::{GuessSource, RoundView};
use crate::game::logger::GameLogger;
use crate::game::state::{GuessOutcome, RoundState};
use crate::game::Phase;
use crate::history::GuessHistory;
use crate::{HangmanError, Result};
use serde::{Deserialize, Serialize};

/// Verbosity level for round output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during the round
    Silent = 0,
    /// Minimal - only the round outcome
    Minimal = 1,
    /// Normal - every guess, its outcome and rejected input (default)
    #[default]
    Normal = 2,
    /// Verbose - also turn headers
    Verbose = 3,
}

/// Reason a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEndReason {
    /// Every letter of the word was guessed
    Solved,
    /// All attempts were used up
    Hanged,
    /// The guess source quit before the round was decided
    Abandoned,
    /// Round reached the maximum number of turns
    TurnLimit,
}

/// Result of running a round
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// Phase the round ended in (`Playing` if abandoned or turn-limited)
    pub phase: Phase,
    pub end_reason: RoundEndReason,
    /// Number of letters pulled from the guess source
    pub turns_played: u32,
    pub secret_word: String,
    pub history: GuessHistory,
}

impl RoundResult {
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }
}

/// Round loop manager
///
/// Owns the logger and history for one round; the round itself is borrowed
/// so the caller keeps it after the loop is done (e.g. to snapshot it).
pub struct RoundLoop<'a> {
    /// The round being played
    pub state: &'a mut RoundState,
    pub logger: GameLogger,
    history: GuessHistory,
    /// Maximum turns before giving up on the source
    max_turns: u32,
    turns_elapsed: u32,
}

impl<'a> RoundLoop<'a> {
    pub fn new(state: &'a mut RoundState) -> Self {
        RoundLoop {
            state,
            logger: GameLogger::new(),
            history: GuessHistory::new(),
            max_turns: 1000,
            turns_elapsed: 0,
        }
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.logger.set_verbosity(verbosity);
        self
    }

    /// Continue an existing history (for resuming from snapshots)
    pub fn with_history(mut self, history: GuessHistory) -> Self {
        self.turns_elapsed = history.len() as u32;
        self.history = history;
        self
    }

    pub fn history(&self) -> &GuessHistory {
        &self.history
    }

    pub fn turns_elapsed(&self) -> u32 {
        self.turns_elapsed
    }

    /// Run the round until it is won, lost or abandoned
    pub fn run_round(&mut self, source: &mut dyn GuessSource) -> Result<RoundResult> {
        loop {
            if let Some(result) = self.run_turn_once(source)? {
                return Ok(result);
            }
        }
    }

    /// Run at most `turns_to_run` turns
    ///
    /// Returns `Ok(None)` if the round is still being played afterwards.
    pub fn run_turns(
        &mut self,
        source: &mut dyn GuessSource,
        turns_to_run: u32,
    ) -> Result<Option<RoundResult>> {
        for _ in 0..turns_to_run {
            if let Some(result) = self.run_turn_once(source)? {
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    /// Run a single turn, returning the result if the round is over
    fn run_turn_once(&mut self, source: &mut dyn GuessSource) -> Result<Option<RoundResult>> {
        if self.state.phase().is_terminal() {
            return Ok(Some(self.finish(source)));
        }

        if self.turns_elapsed >= self.max_turns {
            self.logger
                .round_end(&format!("Turn limit of {} reached", self.max_turns));
            return Ok(Some(self.result(RoundEndReason::TurnLimit)));
        }

        let Some(letter) = source.next_guess(&RoundView::new(self.state)) else {
            self.logger
                .round_end(&format!("{} abandoned the round", source.name()));
            return Ok(Some(self.result(RoundEndReason::Abandoned)));
        };
        self.turns_elapsed += 1;
        self.logger.verbose(&format!("Turn {}", self.turns_elapsed));

        let command = match GuessCommand::new(letter, self.state.alphabet()) {
            Ok(command) => command,
            Err(e @ HangmanError::InvalidLetter(_)) => {
                self.logger.rejected(&format!("Rejected guess: {e}"));
                source.on_guess_rejected(&RoundView::new(self.state), &e);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let applied = command.execute(self.state)?;
        self.history.log(applied);

        let outcome = match applied.outcome {
            GuessOutcome::Hit => "hit",
            GuessOutcome::Miss => "miss",
            GuessOutcome::AlreadyGuessed => "already guessed",
        };
        log_if_verbose!(
            self,
            "'{}' -> {} ({} attempts left, word {})",
            applied.letter,
            outcome,
            applied.attempts_remaining,
            self.state.masked_view()
        );

        source.on_guess_applied(&RoundView::new(self.state), &applied);

        if self.state.phase().is_terminal() {
            return Ok(Some(self.finish(source)));
        }
        Ok(None)
    }

    /// Notify the source and log the outcome of a terminal round
    fn finish(&mut self, source: &mut dyn GuessSource) -> RoundResult {
        let phase = self.state.phase();
        source.on_round_end(&RoundView::new(self.state), phase);

        let reason = if phase == Phase::Won {
            self.logger
                .round_end(&format!("Won: '{}'", self.state.secret_word()));
            RoundEndReason::Solved
        } else {
            self.logger
                .round_end(&format!("Lost: the word was '{}'", self.state.secret_word()));
            RoundEndReason::Hanged
        };
        self.result(reason)
    }

    fn result(&self, end_reason: RoundEndReason) -> RoundResult {
        RoundResult {
            phase: self.state.phase(),
            end_reason,
            turns_played: self.turns_elapsed,
            secret_word: self.state.secret_word(),
            history: self.history.clone(),
        }
    }
}
