//! Centralized round logger
//!
//! All round events go through `GameLogger`, which filters by verbosity and
//! either prints them, captures them in memory, or both. Capturing is what
//! tests and simulations use to inspect a round without touching stdout.

use crate::game::VerbosityLevel;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::ops::Deref;

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to in-memory buffer (no stdout)
    Memory,
}

/// A captured log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    pub message: String,
    /// Optional category (e.g., "guess", "round_end")
    pub category: Option<String>,
}

/// Guard type that provides read-only access to captured entries
pub struct LogGuard<'a> {
    guard: Ref<'a, Vec<LogEntry>>,
}

impl<'a> Deref for LogGuard<'a> {
    type Target = [LogEntry];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

/// Logger for round events
pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_mode: OutputMode,

    /// Captured log entries
    log_buffer: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    /// Create a new logger with default verbosity (Normal)
    pub fn new() -> Self {
        GameLogger {
            verbosity: VerbosityLevel::default(),
            output_mode: OutputMode::default(),
            log_buffer: RefCell::new(Vec::new()),
        }
    }

    /// Capture to the in-memory buffer only (suppresses stdout)
    pub fn enable_capture(&mut self) {
        self.output_mode = OutputMode::Memory;
    }

    pub fn is_capturing(&self) -> bool {
        self.output_mode == OutputMode::Memory
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    /// Get access to captured log entries
    pub fn logs(&self) -> LogGuard<'_> {
        LogGuard {
            guard: self.log_buffer.borrow(),
        }
    }

    /// Route one message according to output mode and verbosity
    ///
    /// Captured entries keep every level; verbosity only filters stdout.
    fn emit(&self, level: VerbosityLevel, message: &str, category: Option<&str>) {
        if self.is_capturing() {
            self.log_buffer.borrow_mut().push(LogEntry {
                level,
                message: message.to_string(),
                category: category.map(str::to_string),
            });
        } else if level <= self.verbosity {
            if level == VerbosityLevel::Minimal {
                println!("{}", message);
            } else {
                println!("  {}", message);
            }
        }
    }

    #[inline]
    pub fn verbose(&self, message: &str) {
        self.emit(VerbosityLevel::Verbose, message, None);
    }

    /// Log the result of a guess at Normal level
    ///
    /// The source name is kept out of the message so logs from different
    /// sources playing the same letters compare equal.
    #[inline]
    pub fn guess(&self, message: &str) {
        self.emit(VerbosityLevel::Normal, message, Some("guess"));
    }

    /// Log a letter the round refused, at Normal level
    #[inline]
    pub fn rejected(&self, message: &str) {
        self.emit(VerbosityLevel::Normal, message, Some("rejected"));
    }

    /// Log the final outcome of a round at Minimal level
    #[inline]
    pub fn round_end(&self, message: &str) {
        self.emit(VerbosityLevel::Minimal, message, Some("round_end"));
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLogger")
            .field("verbosity", &self.verbosity)
            .field("output_mode", &self.output_mode)
            .field("log_count", &self.log_buffer.borrow().len())
            .finish()
    }
}
