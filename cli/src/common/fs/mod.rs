//! # Responder Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Filesystem helpers used by the corpus parsers. Currently a single
//! submodule:
//!
//! - **`io`**: Reads a corpus file into lines, mapping failures onto
//!   `ResponderError::ResourceNotFound` / `ResponderError::ResourceRead`.
//!

/// Contains corpus file reading (`read_lines`).
pub mod io;
