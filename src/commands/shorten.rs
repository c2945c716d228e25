//! @dose
//! purpose: This module implements the shorten command. It resolves the length budget and
//!     the abbreviation dictionary from flags and shortener.toml, then prints one shortened
//!     name per input name.
//!
//! when-editing:
//!     - !--max overrides max_length from the config; with neither, the budget is 0
//!     - !Output is one line per name, in input order, on stdout
//!
//! invariants:
//!     - A dictionary that cannot be read aborts the command before any output
//!
//! flows:
//!     - Resolve: load config, build the lookup, pick the budget
//!     - Shorten: run each name through the shortener
//!     - Write: print results to stdout

use super::input::names_or_stdin;
use crate::cli::ShortenArgs;
use crate::config::Config;
use crate::dictionary::Lookup;
use crate::shortener::shorten;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

pub fn run_shorten(args: &ShortenArgs, root: &Path, _verbose: bool) -> Result<()> {
    let config = Config::load(root);
    let lookup = config
        .lookup(root, &args.dict)
        .context("Failed to load abbreviation dictionary")?;
    let max_length = args.max.or(config.max_length).unwrap_or(0);

    tracing::info!(entries = lookup.len(), max_length, "resolved dictionary and budget");

    let names = names_or_stdin(&args.names)?;
    let shortened = shorten_all(&lookup, &names, max_length);

    let mut stdout = io::stdout().lock();
    for line in &shortened {
        writeln!(stdout, "{}", line).context("Failed to write to stdout")?;
    }

    Ok(())
}

/// Shorten each name with the same lookup and budget
pub fn shorten_all(lookup: &Lookup, names: &[String], max_length: usize) -> Vec<String> {
    names
        .iter()
        .map(|name| {
            let short = shorten(lookup, name, max_length);
            tracing::debug!(name = %name, short = %short, "shortened");
            short
        })
        .collect()
}
