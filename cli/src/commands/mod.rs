//! # Responder Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The subcommands of the `responder` binary. Each module defines its own
//! arguments struct and a handler taking those arguments plus the resolved
//! configuration.
//!
//! - `respond`: Answer one query and exit
//! - `inspect`: Dump the parsed corpora
//!

/// `responder respond <WORD>...`
pub mod respond;
/// `responder inspect`
pub mod inspect;
