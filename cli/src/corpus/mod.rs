//! # Responder Corpus Parsers
//!
//! File: cli/src/corpus/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The two line-oriented corpora the responder is built from:
//!
//! - **`keyed`**: trigger-word groups mapped to multi-line replies
//!   (`KeyedRecordParser` → `TriggerResponseMap`).
//! - **`defaults`**: standalone replies used when nothing matches
//!   (`DefaultRecordParser` → `DefaultResponseList`).
//!
//! Both formats use blank lines as record separators and decide where a
//! record ends by peeking at the next line. The parsers are independent of
//! each other; `selector::ResponseSelector` consumes both.
//!

pub mod defaults;
pub mod keyed;

pub use defaults::{DefaultRecordParser, DefaultResponseList};
pub use keyed::{KeyedRecordParser, TriggerResponseMap};

/// A line with nothing but whitespace separates records.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
