//! Interactive controller for human players
//!
//! Reads letters from a line-based input (stdin in the binary) and displays
//! the round through the renderer. Malformed input never reaches the round:
//! it is rejected here and the player is prompted again.

use crate::game::actions::AppliedGuess;
use crate::game::controller::{GuessSource, RoundView};
use crate::game::render;
use crate::game::state::GuessOutcome;
use crate::game::Phase;
use crate::HangmanError;
use std::io::{self, BufRead, Write};

/// A guess source that prompts a human for letters
pub struct InteractiveGuesser<R, W> {
    input: R,
    output: W,
    /// Show the gallows before every prompt
    show_figure: bool,
    /// Set once a write to `output` fails; the next prompt then quits
    broken: bool,
}

impl InteractiveGuesser<io::StdinLock<'static>, io::Stdout> {
    /// Create an interactive guesser bound to the process terminal
    pub fn stdio() -> Self {
        InteractiveGuesser::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InteractiveGuesser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        InteractiveGuesser {
            input,
            output,
            show_figure: true,
            broken: false,
        }
    }

    /// Toggle drawing the gallows figure before each prompt
    pub fn with_figure(mut self, show_figure: bool) -> Self {
        self.show_figure = show_figure;
        self
    }

    /// Consume the guesser and return its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn display_help(&mut self, view: &RoundView) -> io::Result<()> {
        writeln!(self.output, "\n=== Help ===")?;
        writeln!(
            self.output,
            "  Type one letter of the {} alphabet and press Enter.",
            view.alphabet()
        )?;
        writeln!(self.output, "  ?  - Show this help menu")?;
        writeln!(self.output, "  :q - Quit the round")?;
        writeln!(self.output)
    }

    /// Remember a failed terminal write so the next prompt quits
    fn record_write<T>(&mut self, result: io::Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(_) => {
                self.broken = true;
                None
            }
        }
    }

    /// Prompt until a valid letter is entered; `None` on quit or EOF
    fn read_letter(&mut self, view: &RoundView) -> io::Result<Option<char>> {
        if self.show_figure {
            writeln!(self.output, "{}", render::render_status(view))?;
        }

        loop {
            write!(
                self.output,
                "Enter a letter ({} alphabet, ? for help, :q to quit): ",
                view.alphabet()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match line.trim() {
                "?" => {
                    self.display_help(view)?;
                    continue;
                }
                ":q" | "quit" => return Ok(None),
                // Plain `q` quits only when it cannot be a guess
                "q" if !view.alphabet().contains('q') => return Ok(None),
                _ => {}
            }

            match view.alphabet().parse_letter(&line) {
                Ok(letter) => return Ok(Some(letter)),
                Err(e) => writeln!(self.output, "{e}. Try again.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> GuessSource for InteractiveGuesser<R, W> {
    fn name(&self) -> &str {
        "tui"
    }

    fn next_guess(&mut self, view: &RoundView) -> Option<char> {
        // A broken terminal is treated like the player walking away
        if self.broken {
            return None;
        }
        let letter = self.read_letter(view);
        self.record_write(letter).unwrap_or(None)
    }

    fn on_guess_applied(&mut self, _view: &RoundView, applied: &AppliedGuess) {
        let message = match applied.outcome {
            GuessOutcome::Hit => "The word contains that letter.",
            GuessOutcome::Miss => "No such letter.",
            GuessOutcome::AlreadyGuessed => "That letter was already guessed.",
        };
        let written = writeln!(self.output, "{message}");
        self.record_write(written);
    }

    fn on_guess_rejected(&mut self, _view: &RoundView, error: &HangmanError) {
        let written = writeln!(self.output, "{error}. Try again.");
        self.record_write(written);
    }

    fn on_round_end(&mut self, view: &RoundView, _phase: Phase) {
        if self.show_figure {
            let written = writeln!(self.output, "{}", render::render_status(view));
            self.record_write(written);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::game::state::RoundState;
    use std::io::Cursor;

    fn guesser(input: &str) -> InteractiveGuesser<Cursor<Vec<u8>>, Vec<u8>> {
        InteractiveGuesser::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
            .with_figure(false)
    }

    #[test]
    fn test_reads_valid_letter() {
        let state = RoundState::new("игра", Alphabet::Russian).unwrap();
        let mut guesser = guesser("И\n");
        assert_eq!(guesser.next_guess(&RoundView::new(&state)), Some('и'));
    }

    #[test]
    fn test_reprompts_on_invalid_input() {
        let state = RoundState::new("игра", Alphabet::Russian).unwrap();
        let mut guesser = guesser("\nаб\nq1\nz\n?\nг\n");
        assert_eq!(guesser.next_guess(&RoundView::new(&state)), Some('г'));

        let output = String::from_utf8(guesser.into_output()).unwrap();
        assert_eq!(output.matches("Try again.").count(), 4);
        assert!(output.contains("=== Help ==="));
    }

    #[test]
    fn test_quit_and_eof() {
        let state = RoundState::new("игра", Alphabet::Russian).unwrap();
        let view = RoundView::new(&state);

        assert_eq!(guesser("q\n").next_guess(&view), None);
        assert_eq!(guesser(":q\n").next_guess(&view), None);
        assert_eq!(guesser("quit\n").next_guess(&view), None);
        assert_eq!(guesser("").next_guess(&view), None);
    }

    #[test]
    fn test_q_is_a_letter_in_english() {
        let mut state = RoundState::new("quiz", Alphabet::English).unwrap();
        let mut guesser = guesser("q\nu\ni\nz\n");

        let result = crate::game::RoundLoop::new(&mut state)
            .with_verbosity(crate::game::VerbosityLevel::Silent)
            .run_round(&mut guesser)
            .unwrap();
        assert_eq!(result.end_reason, crate::game::RoundEndReason::Solved);
        assert_eq!(state.masked_view(), "quiz");

        // `:q` still quits an English round
        let state = RoundState::new("quiz", Alphabet::English).unwrap();
        assert_eq!(self::guesser(":q\n").next_guess(&RoundView::new(&state)), None);
    }

    /// Output sink that fails every write
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_feedback_write_quits() {
        let mut state = RoundState::new("игра", Alphabet::Russian).unwrap();
        let mut guesser =
            InteractiveGuesser::new(Cursor::new(b"\xd0\xb3\n".to_vec()), BrokenPipe)
                .with_figure(false);
        let applied = crate::game::actions::apply_guess(&mut state, 'б').unwrap();
        guesser.on_guess_applied(&RoundView::new(&state), &applied);

        // Input still holds a valid letter, but the terminal is gone
        assert_eq!(guesser.next_guess(&RoundView::new(&state)), None);
    }

    #[test]
    fn test_feedback_messages() {
        let mut state = RoundState::new("игра", Alphabet::Russian).unwrap();
        let mut guesser = guesser("");
        let applied = crate::game::actions::apply_guess(&mut state, 'б').unwrap();
        guesser.on_guess_applied(&RoundView::new(&state), &applied);

        let output = String::from_utf8(guesser.into_output()).unwrap();
        assert_eq!(output, "No such letter.\n");
    }
}
