// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pbw`: encode, decode and inspect protobuf wire buffers.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod color;
mod commands;
mod config;
mod exit_error;
mod input;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{decode, encode, inspect};
use config::{Config, LogConfig};
use exit_error::{exit_code, usage_exit_code};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("PBW_GIT_HASH"));

#[derive(Parser)]
#[command(name = "pbw", version = VERSION, about = "Protobuf wire format toolkit", styles = color::styles())]
struct Cli {
    /// TOML config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a message and print its bytes
    Encode(encode::EncodeArgs),
    /// Decode a buffer as a known message
    Decode(decode::DecodeArgs),
    /// List the raw fields of a buffer
    Inspect(inspect::InspectArgs),
}

/// Filter directive used when `RUST_LOG` is unset.
fn default_filter(verbose: bool, log: &LogConfig) -> &str {
    if verbose {
        "debug"
    } else {
        log.filter.as_deref().unwrap_or("warn")
    }
}

fn init_tracing(verbose: bool, log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, log)));
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(color::should_colorize())
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(cli.verbose, &config.log);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Encode(args) => encode::handle(args),
        Commands::Decode(args) => decode::handle(args, &config.decode),
        Commands::Inspect(args) => inspect::handle(args, &config.decode),
    }
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(usage_exit_code(&err));
    });
    if let Err(err) = run(cli) {
        eprintln!("error: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
