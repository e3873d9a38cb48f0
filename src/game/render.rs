//! Text rendering of rounds
//!
//! Pure functions that turn a `RoundView` or a finished `RoundResult` into
//! strings. Printing is left to the caller.

use crate::game::controller::RoundView;
use crate::game::game_loop::{RoundEndReason, RoundResult};
use crate::game::state::STAGE_COUNT;

/// Gallows figures indexed by stage (0 = nothing drawn, 6 = complete)
const STAGES: [&str; STAGE_COUNT] = [
    "





          ",
    "





 =========",
    "

      |
      |
      |
      |
 =========",
    "
  +---+
      |
      |
      |
      |
 =========",
    "
  +---+
  |   |
      |
      |
      |
 =========",
    "
  +---+
  |   |
  O   |
  |   |
      |
 =========",
    "
  +---+
  |   |
  O   |
 /|\\  |
 / \\  |
 =========",
];

/// Figure for a stage; out-of-range stages show the nearest valid figure
pub fn render_stage(stage: usize) -> &'static str {
    STAGES[stage.min(STAGE_COUNT - 1)]
}

/// Masked word with spaces between positions, e.g. "и _ _ а"
pub fn spaced(word: &str) -> String {
    word.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Figure, masked word, attempts and guessed letters for an in-progress round
pub fn render_status(view: &RoundView) -> String {
    let guessed: String = view.guessed_letters().into_iter().collect();
    format!(
        "===== HANGMAN ====={}\nWord: {}\nAttempts left: {}\nGuessed: {}",
        render_stage(view.stage_index()),
        spaced(&view.masked_view()),
        view.attempts_remaining(),
        if guessed.is_empty() { "-" } else { guessed.as_str() },
    )
}

/// Final banner for a finished or abandoned round
pub fn render_outcome(result: &RoundResult) -> String {
    match result.end_reason {
        RoundEndReason::Solved => format!(
            "WINNER. You guessed '{}' in {} turns.",
            result.secret_word, result.turns_played
        ),
        RoundEndReason::Hanged => {
            format!("GAME OVER.\nThe word was '{}'.", result.secret_word)
        }
        RoundEndReason::Abandoned => "Round abandoned.".to_string(),
        RoundEndReason::TurnLimit => {
            format!("Turn limit reached after {} turns.", result.turns_played)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::game::state::RoundState;

    #[test]
    fn test_stages_grow() {
        for stage in 1..STAGE_COUNT {
            let drawn = |s: &str| s.chars().filter(|c| !c.is_whitespace()).count();
            assert!(drawn(render_stage(stage)) > drawn(render_stage(stage - 1)));
        }
    }

    #[test]
    fn test_stage_clamped() {
        assert_eq!(render_stage(7), render_stage(6));
        assert_eq!(render_stage(usize::MAX), render_stage(6));
    }

    #[test]
    fn test_render_status() {
        let mut state = RoundState::new("игра", Alphabet::Russian).unwrap();
        state.apply_guess('а').unwrap();
        state.apply_guess('б').unwrap();

        let status = render_status(&RoundView::new(&state));
        assert!(status.contains("Word: _ _ _ а"));
        assert!(status.contains("Attempts left: 5"));
        assert!(status.contains("Guessed: аб"));
        assert!(status.contains(render_stage(1)));
    }

    #[test]
    fn test_spaced() {
        assert_eq!(spaced("и__а"), "и _ _ а");
        assert_eq!(spaced(""), "");
    }
}
