//! # Responder `inspect` Command
//!
//! File: cli/src/commands/inspect.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Parses both corpora and prints what the responder would work with: the
//! trigger table (sorted by trigger word) and the default replies in corpus
//! order. Handy for checking that blank-line separators in a corpus file are
//! where they should be.
//!
use responder::core::config::Config;
use responder::core::error::Result;
use responder::corpus::{
    DefaultRecordParser, DefaultResponseList, KeyedRecordParser, TriggerResponseMap,
};
use clap::Parser;
use std::fmt::Write as _;

/// # Inspect Command Arguments (`InspectArgs`)
#[derive(Parser, Debug)]
pub struct InspectArgs {}

pub fn handle_inspect(_args: InspectArgs, config: &Config) -> Result<()> {
    let triggers = KeyedRecordParser::load(&config.corpus.keyed_path());
    let defaults =
        DefaultRecordParser::load(&config.corpus.defaults_path(), &config.fallback_response);
    print!("{}", render_report(config, &triggers, &defaults)?);
    Ok(())
}

fn render_report(
    config: &Config,
    triggers: &TriggerResponseMap,
    defaults: &DefaultResponseList,
) -> Result<String> {
    let mut out = String::new();

    writeln!(
        out,
        "Keyed corpus: {} ({} trigger words)",
        config.corpus.keyed,
        triggers.len()
    )?;
    let mut entries: Vec<_> = triggers.iter().collect();
    entries.sort();
    let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (trigger, response) in entries {
        writeln!(out, "  {:<width$} | {}", trigger, response, width = width)?;
    }

    writeln!(
        out,
        "\nDefault corpus: {} ({} responses)",
        config.corpus.defaults,
        defaults.len()
    )?;
    for (i, response) in defaults.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, response)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_report_sorted() {
        let config = Config::default();
        let triggers = KeyedRecordParser::parse("hi,hello\nGreetings!\n\nbye\nSee you.\n".lines());
        let defaults = DefaultRecordParser::parse("Go on.\n".lines());

        let report = render_report(&config, &triggers, &defaults).unwrap();
        let expected = "Keyed corpus: responses.txt (3 trigger words)\n\
                        \x20 bye   | See you.\n\
                        \x20 hello | Greetings!\n\
                        \x20 hi    | Greetings!\n\
                        \n\
                        Default corpus: default.txt (1 responses)\n\
                        \x20 1. Go on.\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_report_empty_triggers() {
        let report = render_report(
            &Config::default(),
            &TriggerResponseMap::new(),
            &DefaultResponseList::default(),
        )
        .unwrap();
        assert!(report.contains("(0 trigger words)"));
        assert!(report.contains("1. Could you elaborate on that?"));
    }
}
