//! # Responder Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file is the entry point for the `responder` binary. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Resolving configuration (`.responder.toml`, then flag/env overrides)
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Answer a query using ./responses.txt and ./default.txt
//! responder respond my computer is slow
//!
//! # Use other corpora and show how they were parsed
//! responder --keyed-corpus bot/responses.txt --default-corpus bot/default.txt -v inspect
//! ```
//!
use clap::Parser;
use responder::core::config::{self, Config};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "responder",
    about = "Keyword-triggered response generator",
    long_about = "Answers a set of words with the reply bound to a known trigger word,\n\
                  or with a random default reply when none of the words is known.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Keyed-response corpus (overrides `.responder.toml`).
    #[arg(long, env = "RESPONDER_KEYED_CORPUS", global = true)]
    keyed_corpus: Option<String>,
    /// Default-response corpus (overrides `.responder.toml`).
    #[arg(long, env = "RESPONDER_DEFAULT_CORPUS", global = true)]
    default_corpus: Option<String>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "r")]
    Respond(commands::respond::RespondArgs),
    #[command(alias = "i")]
    Inspect(commands::inspect::InspectArgs),
}

fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut cfg = config::load_config()?;
    if let Some(path) = &cli.keyed_corpus {
        cfg.corpus.keyed = path.clone();
    }
    if let Some(path) = &cli.default_corpus {
        cfg.corpus.defaults = path.clone();
    }
    config::expand_config_paths(&mut cfg);
    config::validate_config(&cfg)?;
    Ok(cfg)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = resolve_config(&cli).and_then(|cfg| match cli.command {
        Commands::Respond(args) => commands::respond::handle_respond(args, &cfg),
        Commands::Inspect(args) => commands::inspect::handle_inspect(args, &cfg),
    });

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
