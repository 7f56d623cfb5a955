//! # Responder Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utility modules that sit below the corpus parsers. Keeping raw I/O
//! here lets `corpus::` work purely on lines of text.
//!

/// Utilities for filesystem operations (corpus reading).
pub mod fs;
