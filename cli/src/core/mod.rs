//! # Responder Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components shared by the
//! corpus parsers, the selector and the command-line front end:
//! - `config`: Loading and validation of `.responder.toml`
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use responder::core::config; // For loading configuration
//! use responder::core::error::{ResponderError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
