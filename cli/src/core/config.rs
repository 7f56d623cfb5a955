//! # Responder Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads the optional `.responder.toml` file, which tells the
//! responder where its two corpora live and what to say when the default
//! corpus is empty.
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags / environment variables (applied by `main.rs`)
//! 2. `.responder.toml` in the current working directory
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! fallback_response = "Could you elaborate on that?"
//!
//! [corpus]
//! keyed = "responses.txt"
//! defaults = "default.txt"
//! ```
//!
use crate::core::error::{ResponderError, Result};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// File name of the keyed-response corpus, relative to the working directory.
pub const DEFAULT_KEYED_CORPUS: &str = "responses.txt";
/// File name of the default-response corpus, relative to the working directory.
pub const DEFAULT_DEFAULT_CORPUS: &str = "default.txt";
/// Reply inserted when the default corpus yields no entries.
pub const FALLBACK_RESPONSE: &str = "Could you elaborate on that?";

const PROJECT_CONFIG_FILENAME: &str = ".responder.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Reply used when the default corpus is empty or unreadable.
    #[serde(default = "default_fallback_response")]
    pub fallback_response: String,
}

/// Locations of the two corpus files.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CorpusConfig {
    /// Trigger words → response corpus (can use ~).
    #[serde(default = "default_keyed_corpus")]
    pub keyed: String,
    /// Default responses corpus (can use ~).
    #[serde(default = "default_default_corpus")]
    pub defaults: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus: CorpusConfig::default(),
            fallback_response: default_fallback_response(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            keyed: default_keyed_corpus(),
            defaults: default_default_corpus(),
        }
    }
}

impl CorpusConfig {
    pub fn keyed_path(&self) -> PathBuf {
        PathBuf::from(&self.keyed)
    }

    pub fn defaults_path(&self) -> PathBuf {
        PathBuf::from(&self.defaults)
    }
}

fn default_keyed_corpus() -> String {
    DEFAULT_KEYED_CORPUS.to_string()
}
fn default_default_corpus() -> String {
    DEFAULT_DEFAULT_CORPUS.to_string()
}
fn default_fallback_response() -> String {
    FALLBACK_RESPONSE.to_string()
}

/// Loads `.responder.toml` from the current directory, falling back to
/// defaults when the file is absent.
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    load_config_from_dir(&current_dir)
}

/// Same as [`load_config`] but looks for the file in `dir`.
pub fn load_config_from_dir(dir: &Path) -> Result<Config> {
    let config_path = dir.join(PROJECT_CONFIG_FILENAME);
    let mut config = if config_path.is_file() {
        info!("Loading configuration from: {}", config_path.display());
        load_config_from_path(&config_path)?
    } else {
        debug!(
            "No {} found in {}, using defaults.",
            PROJECT_CONFIG_FILENAME,
            dir.display()
        );
        Config::default()
    };
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Expands `~` in both corpus paths.
pub fn expand_config_paths(config: &mut Config) {
    config.corpus.keyed = shellexpand::tilde(&config.corpus.keyed).into_owned();
    config.corpus.defaults = shellexpand::tilde(&config.corpus.defaults).into_owned();
    debug!(
        "Expanded corpus paths: keyed={}, defaults={}",
        config.corpus.keyed, config.corpus.defaults
    );
}

/// Rejects empty corpus paths and a blank fallback reply.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.corpus.keyed.trim().is_empty() {
        return Err(anyhow!(ResponderError::Config(
            "corpus.keyed cannot be an empty path".to_string()
        )));
    }
    if config.corpus.defaults.trim().is_empty() {
        return Err(anyhow!(ResponderError::Config(
            "corpus.defaults cannot be an empty path".to_string()
        )));
    }
    if config.fallback_response.trim().is_empty() {
        return Err(anyhow!(ResponderError::Config(
            "fallback_response cannot be blank".to_string()
        )));
    }
    Ok(())
}
