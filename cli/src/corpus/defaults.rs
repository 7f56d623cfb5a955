//! # Default Response Corpus
//!
//! File: cli/src/corpus/defaults.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Parses the default-response corpus into a [`DefaultResponseList`]: the
//! replies used when no input word is a known trigger.
//!
//! Records are runs of non-blank lines separated by blank lines. The lines of
//! one record are appended directly, with no separator, after their trailing
//! whitespace is stripped.
//!
use super::is_blank;
use crate::common::fs::io;
use crate::core::config::FALLBACK_RESPONSE;
use std::path::Path;
use std::slice;
use tracing::{error, info, warn};

/// Ordered, never-empty list of default responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultResponseList {
    responses: Vec<String>,
}

impl DefaultResponseList {
    /// Wraps `responses`, inserting [`FALLBACK_RESPONSE`] if it is empty.
    pub fn new(responses: Vec<String>) -> Self {
        Self::with_fallback(responses, FALLBACK_RESPONSE)
    }

    /// Wraps `responses`, inserting `fallback` if it is empty.
    pub fn with_fallback(mut responses: Vec<String>, fallback: &str) -> Self {
        if responses.is_empty() {
            warn!("No default responses available, using {:?}", fallback);
            responses.push(fallback.to_string());
        }
        Self { responses }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.responses.get(index).map(String::as_str)
    }

    /// Always at least 1.
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.responses.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.responses
    }
}

impl Default for DefaultResponseList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Builds a [`DefaultResponseList`] from the default-response corpus.
pub struct DefaultRecordParser;

impl DefaultRecordParser {
    /// Parses corpus lines, using [`FALLBACK_RESPONSE`] if none are found.
    pub fn parse<I>(lines: I) -> DefaultResponseList
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::parse_with_fallback(lines, FALLBACK_RESPONSE)
    }

    /// Parses corpus lines, using `fallback` if none are found.
    pub fn parse_with_fallback<I>(lines: I, fallback: &str) -> DefaultResponseList
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        DefaultResponseList::with_fallback(Self::collect_records(lines), fallback)
    }

    /// Reads and parses the corpus at `path`.
    ///
    /// A missing or unreadable file is logged and produces the fallback-only
    /// list.
    pub fn load(path: &Path, fallback: &str) -> DefaultResponseList {
        match io::read_lines(path) {
            Ok(lines) => Self::parse_with_fallback(lines, fallback),
            Err(e) => {
                error!("{}", e);
                DefaultResponseList::with_fallback(Vec::new(), fallback)
            }
        }
    }

    fn collect_records<I>(lines: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut records = Vec::new();
        let mut combination: Option<String> = None;
        let mut lines = lines.into_iter().peekable();

        while let Some(line) = lines.next() {
            let line = line.as_ref();
            if is_blank(line) {
                continue;
            }

            combination
                .get_or_insert_with(String::new)
                .push_str(line.trim_end());

            // Record ends at the next blank line or at end of input.
            if lines.peek().map_or(true, |next| is_blank(next.as_ref())) {
                records.extend(combination.take());
            }
        }

        info!("Parsed {} default responses", records.len());
        records
    }
}
