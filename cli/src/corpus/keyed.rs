//! # Keyed Response Corpus
//!
//! File: cli/src/corpus/keyed.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Parses the keyed-response corpus into a [`TriggerResponseMap`].
//!
//! ## Format
//!
//! ```text
//! hello, hi
//! Greetings!
//! How are you today?
//!
//! bye
//! See you later.
//! ```
//!
//! Each record starts with a comma-separated list of trigger words. The lines
//! after it, up to the next blank line or the end of input, form the response
//! and are joined with a single space. The example above yields
//! `hello`/`hi` → `"Greetings! How are you today?"` and `bye` →
//! `"See you later."`.
//!
//! ## Architecture
//!
//! A two-state machine (`AwaitingTriggers`, `AccumulatingResponse`) walks a
//! `Peekable` over the lines. The record is emitted as soon as the peeked line
//! is blank or the input is exhausted, so the file is read exactly once and no
//! pending record survives past the last line.
//!
use super::is_blank;
use crate::common::fs::io;
use std::collections::hash_map::{self, HashMap};
use std::path::Path;
use tracing::{debug, error, info};

/// Trigger word → response text.
///
/// Keys are trimmed and case-sensitive. Inserting an existing key replaces
/// its response, so the last record in the corpus wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerResponseMap {
    entries: HashMap<String, String>,
}

impl TriggerResponseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `trigger` to `response`, returning the response it replaced.
    pub fn insert(
        &mut self,
        trigger: impl Into<String>,
        response: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(trigger.into(), response.into())
    }

    pub fn get(&self, trigger: &str) -> Option<&str> {
        self.entries.get(trigger).map(String::as_str)
    }

    pub fn contains(&self, trigger: &str) -> bool {
        self.entries.contains_key(trigger)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TriggerResponseMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (trigger, response) in iter {
            map.insert(trigger, response);
        }
        map
    }
}

/// Parser state between lines.
enum State {
    /// Between records; the next non-blank line is a trigger line.
    AwaitingTriggers,
    /// Inside a record, collecting body lines.
    AccumulatingResponse {
        triggers: Vec<String>,
        response: String,
    },
}

/// Builds a [`TriggerResponseMap`] from the keyed-response corpus.
pub struct KeyedRecordParser;

impl KeyedRecordParser {
    /// Parses already-split corpus lines.
    ///
    /// Never fails. Leading or repeated blank lines are skipped, a trigger
    /// line without a body binds its words to an empty response, and a
    /// trigger line with no words still consumes its body.
    pub fn parse<I>(lines: I) -> TriggerResponseMap
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut map = TriggerResponseMap::new();
        let mut lines = lines.into_iter().peekable();
        let mut state = State::AwaitingTriggers;

        while let Some(line) = lines.next() {
            let line = line.as_ref();

            state = match state {
                State::AwaitingTriggers if is_blank(line) => State::AwaitingTriggers,
                State::AwaitingTriggers => State::AccumulatingResponse {
                    triggers: split_triggers(line),
                    response: String::new(),
                },
                State::AccumulatingResponse { triggers, mut response } => {
                    if !response.is_empty() {
                        response.push(' ');
                    }
                    response.push_str(line.trim());
                    State::AccumulatingResponse { triggers, response }
                }
            };

            let at_boundary = lines.peek().map_or(true, |next| is_blank(next.as_ref()));
            if let State::AccumulatingResponse { triggers, response } = &state {
                if at_boundary {
                    emit(&mut map, triggers, response);
                    state = State::AwaitingTriggers;
                }
            }
        }

        info!("Parsed {} trigger words from keyed corpus", map.len());
        map
    }

    /// Reads and parses the corpus at `path`.
    ///
    /// A missing or unreadable file is logged and produces an empty map.
    pub fn load(path: &Path) -> TriggerResponseMap {
        match io::read_lines(path) {
            Ok(lines) => Self::parse(lines),
            Err(e) => {
                error!("{}", e);
                TriggerResponseMap::new()
            }
        }
    }
}

fn split_triggers(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

fn emit(map: &mut TriggerResponseMap, triggers: &[String], response: &str) {
    if triggers.is_empty() {
        debug!("Dropping record without trigger words: {:?}", response);
    }
    for trigger in triggers {
        if let Some(previous) = map.insert(trigger.as_str(), response) {
            debug!("Trigger {:?} redefined, replacing {:?}", trigger, previous);
        }
    }
}
