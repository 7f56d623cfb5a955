//! # Responder Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`respond.rs`, `inspect.rs`,
//! `main_tests.rs`): a command builder for the compiled binary and a helper
//! that lays out corpus files in a temporary working directory.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Keyed corpus used by most tests.
pub const KEYED_CORPUS: &str = "\
hello,hi
Greetings!

slow, performance
I think this might be
a hardware problem.

crash
Well, it never crashes on our system.";

/// Default corpus used by most tests.
pub const DEFAULT_CORPUS: &str = "\
Tell me more.

Why do you say that?
";

/// # Get Responder Command (`responder_cmd`)
///
/// Builds an `assert_cmd::Command` for the compiled `responder` binary with
/// the corpus environment overrides cleared, so the host environment cannot
/// leak into a test.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn responder_cmd() -> Command {
    let mut cmd = Command::cargo_bin("responder").expect("Failed to find responder binary for testing");
    cmd.env_remove("RESPONDER_KEYED_CORPUS")
        .env_remove("RESPONDER_DEFAULT_CORPUS")
        .env_remove("RUST_LOG");
    cmd
}

/// Creates a temporary directory holding `responses.txt` and `default.txt`.
/// Pass `None` to leave a file out.
pub fn corpus_dir(keyed: Option<&str>, defaults: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir for corpora");
    if let Some(content) = keyed {
        fs::write(dir.path().join("responses.txt"), content).expect("Failed to write responses.txt");
    }
    if let Some(content) = defaults {
        fs::write(dir.path().join("default.txt"), content).expect("Failed to write default.txt");
    }
    dir
}
