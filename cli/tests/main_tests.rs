//! # Responder CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level behaviour of the `responder` binary: standard flags, argument
//! errors and configuration handling.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_help_lists_subcommands() {
    responder_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("respond").and(predicate::str::contains("inspect")));
}

#[test]
fn test_missing_subcommand_fails() {
    responder_cmd().assert().failure();
}

/// `.responder.toml` in the working directory selects the corpora.
#[test]
fn test_config_file_selects_corpora() {
    let dir = corpus_dir(None, None);
    fs::create_dir(dir.path().join("bot")).unwrap();
    fs::write(dir.path().join("bot/keys.txt"), "ping\npong\n").unwrap();
    fs::write(
        dir.path().join(".responder.toml"),
        "[corpus]\nkeyed = \"bot/keys.txt\"\n",
    )
    .unwrap();

    responder_cmd()
        .current_dir(dir.path())
        .args(["respond", "ping"])
        .assert()
        .success()
        .stdout("pong\n");
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = corpus_dir(Some(KEYED_CORPUS), Some(DEFAULT_CORPUS));
    fs::write(dir.path().join(".responder.toml"), "unknown_key = 1\n").unwrap();

    responder_cmd()
        .current_dir(dir.path())
        .args(["respond", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_blank_fallback_in_config_fails() {
    let dir = corpus_dir(None, None);
    fs::write(dir.path().join(".responder.toml"), "fallback_response = \"  \"\n").unwrap();

    responder_cmd()
        .current_dir(dir.path())
        .arg("inspect")
        .assert()
        .failure();
}
