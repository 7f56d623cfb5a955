//! # Responder `respond` Command
//!
//! File: cli/src/commands/respond.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Answers a single query. The positional arguments are split on whitespace
//! into a word set, handed to the responder, and the reply is printed on
//! stdout. Runs once and exits; there is no prompt loop.
//!
//! ```bash
//! responder respond my program keeps crashing
//! responder respond "why is it so slow"
//! ```
//!
use responder::core::config::Config;
use responder::core::error::Result;
use responder::Responder;
use clap::Parser;
use std::collections::HashSet;
use tracing::debug;

/// # Respond Command Arguments (`RespondArgs`)
#[derive(Parser, Debug)]
pub struct RespondArgs {
    /// Words of the query. May be empty, in which case a default reply is given.
    pub words: Vec<String>,
}

/// Builds the input word set from raw arguments.
pub fn collect_words(args: &[String]) -> HashSet<String> {
    args.iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(str::to_string)
        .collect()
}

pub fn handle_respond(args: RespondArgs, config: &Config) -> Result<()> {
    let words = collect_words(&args.words);
    debug!("Input words: {:?}", words);

    let mut responder = Responder::from_config(config);
    println!("{}", responder.generate_response(&words));
    Ok(())
}
