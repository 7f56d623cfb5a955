//! # Responder Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A keyword-triggered response generator. Two plain-text corpora are read
//! once at construction:
//!
//! - a keyed corpus binding groups of trigger words to replies, and
//! - a default corpus of replies used when nothing matches.
//!
//! A query is a set of words; the reply is the one bound to the first word
//! that is a trigger, or a random default reply.
//!
//! ## Architecture
//!
//! - `common`: Corpus file reading
//! - `core`: Configuration and error types
//! - `corpus`: The keyed and default corpus parsers
//! - `selector`: `ResponseSelector`, the lookup-or-fallback component
//!
//! ## Examples
//!
//! ```rust,no_run
//! use responder::Responder;
//! use std::collections::HashSet;
//!
//! let mut responder = Responder::new(); // responses.txt + default.txt in the working directory
//! let words: HashSet<String> = ["my", "laptop", "is", "slow"].iter().map(|w| w.to_string()).collect();
//! println!("{}", responder.generate_response(&words));
//! ```
//!
pub mod common;
pub mod core;
pub mod corpus;
pub mod selector;

pub use selector::{Responder, ResponseSelector};
