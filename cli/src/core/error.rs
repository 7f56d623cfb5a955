//! # Responder Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Responder crate.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ResponderError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! Corpus errors (`ResourceNotFound`, `ResourceRead`) never travel far: the
//! parsers catch them at their boundary, log them, and fall back to an empty
//! or default result so a response can always be produced.
//!
//! ## Examples
//!
//! ```rust
//! use responder::core::error::ResponderError;
//! use std::path::PathBuf;
//!
//! let err = ResponderError::ResourceNotFound { path: PathBuf::from("responses.txt") };
//! assert_eq!(err.to_string(), "Unable to open responses.txt");
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the Responder crate.
#[derive(Error, Debug)]
pub enum ResponderError {
    #[error("Unable to open {}", .path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("A problem was encountered reading {}: {source}", .path.display())]
    ResourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
