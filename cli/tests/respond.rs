//! # Responder CLI Respond Integration Tests
//!
//! File: cli/tests/respond.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs `responder respond` against corpora written to a temporary working
//! directory and checks the single line it prints.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_known_trigger() {
    let dir = corpus_dir(Some(KEYED_CORPUS), Some(DEFAULT_CORPUS));

    responder_cmd()
        .current_dir(dir.path())
        .args(["respond", "hi"])
        .assert()
        .success()
        .stdout("Greetings!\n");
}

#[test]
fn test_multi_line_response_and_last_record() {
    let dir = corpus_dir(Some(KEYED_CORPUS), Some(DEFAULT_CORPUS));

    responder_cmd()
        .current_dir(dir.path())
        .args(["respond", "why is it so slow"])
        .assert()
        .success()
        .stdout("I think this might be a hardware problem.\n");

    // Last block has no trailing blank line.
    responder_cmd()
        .current_dir(dir.path())
        .args(["respond", "crash"])
        .assert()
        .success()
        .stdout("Well, it never crashes on our system.\n");
}

#[test]
fn test_unknown_words_get_a_default() {
    let dir = corpus_dir(Some(KEYED_CORPUS), Some(DEFAULT_CORPUS));

    responder_cmd()
        .current_dir(dir.path())
        .args(["respond", "the", "weather"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Tell me more.")
                .or(predicate::str::contains("Why do you say that?")),
        );
}

#[test]
fn test_no_words_gets_a_default() {
    let dir = corpus_dir(Some(KEYED_CORPUS), Some(DEFAULT_CORPUS));

    responder_cmd()
        .current_dir(dir.path())
        .arg("respond")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Tell me more.")
                .or(predicate::str::contains("Why do you say that?")),
        );
}

/// Without any corpus files the responder still answers, using the fallback.
#[test]
fn test_missing_corpora_fall_back() {
    let dir = corpus_dir(None, None);

    responder_cmd()
        .current_dir(dir.path())
        .args(["respond", "hello"])
        .assert()
        .success()
        .stdout("Could you elaborate on that?\n")
        .stderr(predicate::str::contains("Unable to open"));
}

#[test]
fn test_corpus_flags_override_defaults() {
    let dir = corpus_dir(None, None);
    std::fs::write(dir.path().join("k.txt"), "tea\nEarl Grey, hot.\n").unwrap();
    std::fs::write(dir.path().join("d.txt"), "Hmm.\n").unwrap();

    responder_cmd()
        .current_dir(dir.path())
        .args(["--keyed-corpus", "k.txt", "--default-corpus", "d.txt", "respond", "tea"])
        .assert()
        .success()
        .stdout("Earl Grey, hot.\n");

    responder_cmd()
        .current_dir(dir.path())
        .env("RESPONDER_DEFAULT_CORPUS", "d.txt")
        .args(["respond", "coffee"])
        .assert()
        .success()
        .stdout("Hmm.\n");
}
