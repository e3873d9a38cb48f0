//! End-to-end tests for the `hangman` binary
//!
//! These run the compiled binary with scripted and random guessers and
//! check its stdout, exit status and determinism.

use similar_asserts::assert_eq;
use std::process::{Command, Output, Stdio};

fn run_hangman(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hangman"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run hangman binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("Invalid UTF-8 in stdout")
}

#[test]
fn test_scripted_win() {
    let output = run_hangman(&[
        "play",
        "--word",
        "игра",
        "--guesser",
        "scripted",
        "--script",
        "и,г,р,а",
    ]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("WINNER."), "unexpected output:\n{out}");
    assert!(out.contains("Word: и г р а"));
}

#[test]
fn test_scripted_loss_reveals_word() {
    let output = run_hangman(&[
        "play",
        "--word",
        "игра",
        "--guesser",
        "scripted",
        "--script",
        "б в д е ж з",
        "--verbosity",
        "minimal",
    ]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("GAME OVER."));
    assert!(out.contains("The word was 'игра'."));
    // Minimal verbosity hides per-guess lines
    assert!(!out.contains("-> miss"));
}

#[test]
fn test_tui_quits_on_eof() {
    let output = run_hangman(&["play", "--word", "игра", "--guesser", "tui"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Round abandoned."));
}

#[test]
fn test_invalid_word_rejected() {
    let output = run_hangman(&["play", "--word", "game", "--guesser", "random"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid secret word"), "stderr:\n{stderr}");
}

#[test]
fn test_scripted_requires_script() {
    let output = run_hangman(&["play", "--word", "игра", "--guesser", "scripted"]);
    assert!(!output.status.success());
}

#[test]
fn test_seeded_random_play_is_deterministic() {
    let args = ["play", "--guesser", "random", "--seed", "42", "-v", "verbose"];
    let run1 = stdout(&run_hangman(&args));
    let run2 = stdout(&run_hangman(&args));

    assert!(!run1.is_empty());
    assert_eq!(run1, run2);
}

#[test]
fn test_abandoned_round_snapshot_and_resume() {
    let path = std::env::temp_dir().join(format!("hangman-cli-{}.snapshot", std::process::id()));
    let path_str = path.to_str().expect("temp path is UTF-8");

    let first = run_hangman(&[
        "play",
        "--word",
        "игра",
        "--guesser",
        "scripted",
        "--script",
        "б и",
        "--snapshot-output",
        path_str,
    ]);
    assert!(first.status.success());
    assert!(stdout(&first).contains("Snapshot saved to:"));

    let resumed = run_hangman(&[
        "play",
        "--start-from",
        path_str,
        "--guesser",
        "scripted",
        "--script",
        "г р а",
    ]);
    let _ = std::fs::remove_file(&path);

    assert!(resumed.status.success());
    let out = stdout(&resumed);
    assert!(out.contains("Resuming round from"));
    assert!(out.contains("WINNER."));
    assert!(out.contains("Attempts left: 5"));
}

#[test]
fn test_sim_summary() {
    let output = run_hangman(&["sim", "--rounds", "20", "--seed", "7"]);
    assert!(output.status.success());

    let out = stdout(&output);
    let count = |label: &str| -> usize {
        out.lines()
            .find_map(|line| line.strip_prefix(label))
            .and_then(|n| n.trim().parse().ok())
            .unwrap_or_else(|| panic!("missing '{label}' in:\n{out}"))
    };
    assert_eq!(count("Won:") + count("Lost:"), 20);
}
