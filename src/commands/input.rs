//! Name input shared by the commands: positional arguments, or stdin lines when there are none.

use anyhow::{Context, Result};
use std::io::{self, BufRead};

/// Names from the command line, falling back to non-empty lines of `reader`.
pub(crate) fn collect_names<R: BufRead>(names: &[String], reader: R) -> Result<Vec<String>> {
    if !names.is_empty() {
        return Ok(names.to_vec());
    }

    let mut collected = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read from stdin")?;
        let name = line.trim();
        if !name.is_empty() {
            collected.push(name.to_string());
        }
    }
    Ok(collected)
}

pub(crate) fn names_or_stdin(names: &[String]) -> Result<Vec<String>> {
    collect_names(names, io::stdin().lock())
}
