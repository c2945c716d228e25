//! @dose
//! purpose: The abbreviation dictionary. Maps full words to their short forms and answers
//!     exact-match queries from the shortener. Parses the `short=long` text format used by
//!     dictionary files.
//!
//! when-editing:
//!     - !Dictionary text is "abbreviation=full word" but the map is keyed by the full word
//!     - !Parsing is permissive: malformed lines are skipped, never reported
//!     - Later entries override earlier ones for the same full word
//!
//! invariants:
//!     - Lookup::get never fails; a miss returns the queried word
//!     - A Lookup is read-only once handed to the shortener
//!
//! gotchas:
//!     - A line with more than one '=' is dropped entirely, not split on the first one
//!     - Keys are case-sensitive ("Strategy" and "strategy" are different words)

use std::collections::HashMap;
use std::convert::Infallible;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Exact-match dictionary from full word to abbreviation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookup {
    items: HashMap<String, String>,
}

impl Lookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse dictionary text where each line reads `abbreviation=full`.
    ///
    /// Lines without exactly one `=` or with an empty abbreviation are ignored.
    pub fn parse(text: &str) -> Self {
        let mut lookup = Self::new();
        for line in text.lines() {
            let mut fields = line.split('=');
            let (Some(abbreviation), Some(full), None) = (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };
            if !abbreviation.is_empty() {
                lookup.insert(full, abbreviation);
            }
        }
        lookup
    }

    /// Read and parse a dictionary file
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lookup = Self::parse(&text);
        tracing::debug!(path = %path.display(), entries = lookup.len(), "loaded dictionary");
        Ok(lookup)
    }

    /// Abbreviation for `word`, or `word` itself when it is not in the dictionary.
    pub fn get<'a>(&'a self, word: &'a str) -> &'a str {
        match self.items.get(word) {
            Some(abbreviation) => abbreviation.as_str(),
            None => word,
        }
    }

    /// Abbreviation for `word` if one is known
    pub fn find(&self, word: &str) -> Option<&str> {
        self.items.get(word).map(String::as_str)
    }

    pub fn insert(&mut self, full: impl Into<String>, abbreviation: impl Into<String>) {
        self.items.insert(full.into(), abbreviation.into());
    }

    /// Merge another dictionary into this one. Entries from `other` win.
    pub fn extend(&mut self, other: Lookup) {
        self.items.extend(other.items);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromStr for Lookup {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Lookup {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut lookup = Self::new();
        for (full, abbreviation) in iter {
            lookup.insert(full, abbreviation);
        }
        lookup
    }
}
