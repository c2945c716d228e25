//! @dose
//! purpose: This is the CLI entry point for shortener. It parses command-line arguments using
//!     clap, sets up logging, determines the project root directory, and dispatches to the
//!     command handler.
//!
//! when-editing:
//!     - !All command handlers are imported from the shortener crate
//!     - !The root directory defaults to current working directory if not specified
//!     - Error messages are printed to stderr and exit with code 1
//!
//! invariants:
//!     - stdout carries results only; logs go to stderr
//!     - The process exits with 0 on success, 1 on any error
//!
//! do-not:
//!     - Never add business logic here - delegate to command modules

use anyhow::Context;
use clap::Parser;
use shortener::cli::{Cli, Commands};
use shortener::commands::{run_shorten, run_tokenize};
use std::env;
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("shortener=debug")
        } else {
            EnvFilter::new("shortener=warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = match cli.root {
        Some(root) => root,
        None => env::current_dir().context("Failed to get current directory")?,
    };

    match cli.command {
        Commands::Shorten(args) => run_shorten(&args, &root, cli.verbose),
        Commands::Tokenize(args) => run_tokenize(&args, cli.verbose),
    }
}
