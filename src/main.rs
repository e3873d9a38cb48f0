//! Hangman - Main Binary
//!
//! Text-based hangman with interactive, scripted and random guessers

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use hangman_rs::{
    core::Alphabet,
    game::{
        render, GuessSource, GuesserState, InteractiveGuesser, RandomGuesser, RoundEndReason,
        RoundLoop, RoundSnapshot, RoundState, RoundView, ScriptedGuesser, VerbosityLevel,
        MAX_ATTEMPTS,
    },
    history::GuessHistory,
    loader::WordList,
};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::io;
use std::path::{Path, PathBuf};

/// Guess source driving the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GuesserType {
    /// Text UI for human play via stdin
    Tui,
    /// Picks random unguessed letters
    Random,
    /// Plays a fixed list of letters (requires --script)
    Scripted,
}

/// Verbosity level for round output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "hangman")]
#[command(about = "Hangman - guess the word one letter at a time", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single round
    Play {
        /// Secret word (default: random pick from the word list)
        #[arg(long, conflicts_with = "words")]
        word: Option<String>,

        /// Word list file, one word per line (default: built-in list)
        #[arg(long, value_name = "FILE")]
        words: Option<PathBuf>,

        /// Alphabet for the secret word and guesses
        #[arg(long, default_value = "russian")]
        alphabet: Alphabet,

        /// Guess source
        #[arg(long, value_enum, default_value = "tui")]
        guesser: GuesserType,

        /// Letters for the scripted guesser (space or comma separated, e.g. "и г р а")
        #[arg(long, value_name = "LETTERS")]
        script: Option<String>,

        /// Set random seed for deterministic testing
        #[arg(long)]
        seed: Option<u64>,

        /// Verbosity level for round output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityArg,

        /// Save a snapshot here if the round is abandoned before it ends
        #[arg(long, value_name = "SNAPSHOT_FILE")]
        snapshot_output: Option<PathBuf>,

        /// Load and resume a round from a snapshot file
        #[arg(long, value_name = "SNAPSHOT_FILE", conflicts_with_all = ["word", "words"])]
        start_from: Option<PathBuf>,
    },

    /// Play many rounds with the random guesser and report statistics
    Sim {
        /// Number of rounds to play
        #[arg(long, short = 'r', default_value_t = 1000)]
        rounds: usize,

        /// Random seed for deterministic simulation
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Word list file (default: built-in list)
        #[arg(long, value_name = "FILE")]
        words: Option<PathBuf>,

        /// Alphabet of the word list
        #[arg(long, default_value = "russian")]
        alphabet: Alphabet,
    },
}

/// The guess source of a running round
enum ActiveGuesser {
    Tui(InteractiveGuesser<io::StdinLock<'static>, io::Stdout>),
    Random(RandomGuesser),
    Scripted(ScriptedGuesser),
}

impl ActiveGuesser {
    fn as_source(&mut self) -> &mut dyn GuessSource {
        match self {
            ActiveGuesser::Tui(g) => g,
            ActiveGuesser::Random(g) => g,
            ActiveGuesser::Scripted(g) => g,
        }
    }

    fn saved_state(&self) -> Option<GuesserState> {
        match self {
            ActiveGuesser::Tui(_) => None,
            ActiveGuesser::Random(g) => Some(GuesserState::Random(g.clone())),
            ActiveGuesser::Scripted(g) => Some(GuesserState::Scripted(g.clone())),
        }
    }

    fn is_interactive(&self) -> bool {
        matches!(self, ActiveGuesser::Tui(_))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            word,
            words,
            alphabet,
            guesser,
            script,
            seed,
            verbosity,
            snapshot_output,
            start_from,
        } => {
            run_play(
                word,
                words,
                alphabet,
                guesser,
                script,
                seed,
                verbosity.into(),
                snapshot_output,
                start_from,
            )
            .await?
        }
        Commands::Sim {
            rounds,
            seed,
            words,
            alphabet,
        } => run_sim(rounds, seed, words, alphabet).await?,
    }

    Ok(())
}

fn make_rng(seed: Option<u64>) -> ChaCha12Rng {
    match seed {
        Some(seed) => ChaCha12Rng::seed_from_u64(seed),
        None => ChaCha12Rng::from_entropy(),
    }
}

async fn load_word_list(path: Option<&Path>, alphabet: Alphabet) -> anyhow::Result<WordList> {
    match path {
        Some(path) => WordList::load_from_file_async(path, alphabet)
            .await
            .with_context(|| format!("failed to load word list {}", path.display())),
        None if alphabet == WordList::builtin().alphabet() => Ok(WordList::builtin()),
        None => bail!(
            "the built-in word list is {}; pass --words or --word",
            WordList::builtin().alphabet()
        ),
    }
}

fn make_guesser(
    guesser: GuesserType,
    script: Option<&str>,
    seed: Option<u64>,
    alphabet: Alphabet,
) -> anyhow::Result<ActiveGuesser> {
    Ok(match guesser {
        GuesserType::Tui => ActiveGuesser::Tui(InteractiveGuesser::stdio()),
        GuesserType::Random => ActiveGuesser::Random(match seed {
            Some(seed) => RandomGuesser::with_seed(seed),
            None => RandomGuesser::new(),
        }),
        GuesserType::Scripted => {
            let Some(script) = script else {
                bail!("--guesser scripted requires --script");
            };
            ActiveGuesser::Scripted(ScriptedGuesser::parse_script(script, alphabet)?)
        }
    })
}

#[allow(clippy::too_many_arguments)]
async fn run_play(
    word: Option<String>,
    words: Option<PathBuf>,
    alphabet: Alphabet,
    guesser: GuesserType,
    script: Option<String>,
    seed: Option<u64>,
    verbosity: VerbosityLevel,
    snapshot_output: Option<PathBuf>,
    start_from: Option<PathBuf>,
) -> anyhow::Result<()> {
    let (mut state, history, saved_guesser) = match start_from {
        Some(path) => {
            let snapshot = RoundSnapshot::load_from_file(&path)
                .with_context(|| format!("failed to load snapshot {}", path.display()))?;
            if !snapshot.is_consistent() {
                bail!("snapshot {} does not match its guess history", path.display());
            }
            if verbosity >= VerbosityLevel::Minimal {
                println!("Resuming round from {}", path.display());
            }
            (snapshot.state, snapshot.history, snapshot.guesser)
        }
        None => {
            let secret = match word {
                Some(word) => word,
                None => {
                    let list = load_word_list(words.as_deref(), alphabet).await?;
                    list.choose(&mut make_rng(seed)).to_string()
                }
            };
            let state = RoundState::new(&secret, alphabet)?;
            (state, GuessHistory::new(), None)
        }
    };

    let mut active = match saved_guesser {
        Some(GuesserState::Random(g)) if guesser == GuesserType::Random => ActiveGuesser::Random(g),
        Some(GuesserState::Scripted(g)) if guesser == GuesserType::Scripted && script.is_none() => {
            ActiveGuesser::Scripted(g)
        }
        _ => make_guesser(guesser, script.as_deref(), seed, state.alphabet())?,
    };

    let result = {
        let mut round_loop = RoundLoop::new(&mut state)
            .with_verbosity(verbosity)
            .with_history(history);
        round_loop.run_round(active.as_source())?
    };

    if !active.is_interactive() && verbosity >= VerbosityLevel::Normal {
        println!("{}", render::render_status(&RoundView::new(&state)));
    }
    if verbosity >= VerbosityLevel::Minimal {
        println!("{}", render::render_outcome(&result));
    }

    if result.end_reason == RoundEndReason::Abandoned {
        if let Some(path) = snapshot_output {
            let mut snapshot = RoundSnapshot::new(state.clone(), result.history.clone());
            if let Some(saved) = active.saved_state() {
                snapshot = snapshot.with_guesser(saved);
            }
            snapshot
                .save_to_file(&path)
                .with_context(|| format!("failed to save snapshot {}", path.display()))?;
            println!("Snapshot saved to: {}", path.display());
        }
    }

    Ok(())
}

async fn run_sim(
    rounds: usize,
    seed: u64,
    words: Option<PathBuf>,
    alphabet: Alphabet,
) -> anyhow::Result<()> {
    let list = load_word_list(words.as_deref(), alphabet).await?;
    let mut rng = ChaCha12Rng::seed_from_u64(seed);

    println!("=== Hangman Simulation ===");
    println!("Rounds: {rounds}");
    println!("Seed: {seed}");
    println!("Words: {}", list.len());

    let mut won = 0usize;
    let mut total_misses = 0usize;
    for i in 0..rounds {
        let mut state = RoundState::new(list.choose(&mut rng), list.alphabet())?;
        let mut guesser = RandomGuesser::with_seed(seed.wrapping_add(i as u64));

        let result = RoundLoop::new(&mut state)
            .with_verbosity(VerbosityLevel::Silent)
            .with_history(GuessHistory::disabled())
            .run_round(&mut guesser)?;

        if result.is_won() {
            won += 1;
        }
        total_misses += (MAX_ATTEMPTS - state.attempts_remaining()) as usize;
    }

    let average_misses = if rounds == 0 {
        0.0
    } else {
        total_misses as f64 / rounds as f64
    };
    println!("Won: {won}");
    println!("Lost: {}", rounds - won);
    println!("Average misses: {average_misses:.2}");

    Ok(())
}
