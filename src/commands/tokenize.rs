//! The tokenize command: prints the segments of each name separated by spaces.
//! Useful for checking where the shortener will cut before choosing dictionary entries.

use super::input::names_or_stdin;
use crate::cli::TokenizeArgs;
use crate::tokenizer::tokenize;
use anyhow::{Context, Result};
use std::io::{self, Write};

pub fn run_tokenize(args: &TokenizeArgs, _verbose: bool) -> Result<()> {
    let names = names_or_stdin(&args.names)?;

    let mut stdout = io::stdout().lock();
    for name in &names {
        writeln!(stdout, "{}", format_segments(name)).context("Failed to write to stdout")?;
    }

    Ok(())
}

/// Segments of `name` joined with single spaces
pub fn format_segments(name: &str) -> String {
    tokenize(name).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_segments() {
        assert_eq!(format_segments("AaaBBbCcc"), "Aaa B Bb Ccc");
        assert_eq!(format_segments("a--b--c"), "a -- b -- c");
        assert_eq!(format_segments(""), "");
    }
}
