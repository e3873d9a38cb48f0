//! Round state, turn structure and guess sources

pub mod actions;
pub mod controller;
pub mod game_loop;
pub mod interactive_controller;
pub mod logger;
pub mod phase;
pub mod random_controller;
pub mod render;
pub mod scripted_controller;
pub mod snapshot;
pub mod state;

pub use actions::{apply_guess, AppliedGuess, GuessCommand};
pub use controller::{GuessSource, RoundView};
pub use game_loop::{RoundEndReason, RoundLoop, RoundResult, VerbosityLevel};
pub use interactive_controller::InteractiveGuesser;
pub use logger::{GameLogger, LogEntry};
pub use phase::Phase;
pub use random_controller::RandomGuesser;
pub use scripted_controller::ScriptedGuesser;
pub use snapshot::{GuesserState, RoundSnapshot, SnapshotError};
pub use state::{GuessOutcome, RoundState, MAX_ATTEMPTS, PLACEHOLDER, STAGE_COUNT};
