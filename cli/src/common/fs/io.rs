//! # Responder Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module reads corpus files from disk. It wraps `std::fs` / `std::io`
//! so that the two failure modes the parsers care about come back as typed
//! `ResponderError` values:
//! - **`ResourceNotFound`**: the file does not exist.
//! - **`ResourceRead`**: the file exists but could not be opened or read to
//!   the end (permissions, I/O failure, non-text bytes).
//!
//! ## Usage
//!
//! ```rust
//! use responder::common::fs::io;
//! use std::path::Path;
//!
//! match io::read_lines(Path::new("responses.txt")) {
//!     Ok(lines) => println!("{} lines", lines.len()),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```
//!
use crate::core::error::ResponderError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Reads every line of the file at `path`.
///
/// Lines are split the way `BufRead::lines` splits them (`\n` or `\r\n`,
/// terminator removed). The whole file is read before returning, so a
/// failure halfway through yields an error rather than a truncated corpus.
///
/// # Errors
///
/// - `ResponderError::ResourceNotFound` if no file exists at `path`.
/// - `ResponderError::ResourceRead` for any other open or read failure.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ResponderError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ResponderError::ResourceNotFound {
            path: path.to_path_buf(),
        },
        _ => ResponderError::ResourceRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let lines = BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .map_err(|source| ResponderError::ResourceRead {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Read {} lines from {:?}", lines.len(), path);
    Ok(lines)
}
