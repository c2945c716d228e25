//! @dose
//! purpose: Configuration file parsing for shortener.toml. Holds the default length budget,
//!     the dictionary files to load, and inline abbreviations.
//!
//! when-editing:
//!     - !Config is loaded once at startup and passed to the command handlers
//!     - !Dictionary paths are relative to the project root unless absolute
//!     - Inline [abbreviations] are keyed by the full word, unlike dictionary files
//!
//! invariants:
//!     - Config::load returns default config if shortener.toml doesn't exist
//!     - A broken config file is a warning, never a failure
//!
//! gotchas:
//!     - Merge order for the lookup is config files, then CLI files, then inline entries;
//!       the last source to define a word wins

use crate::dictionary::{DictionaryError, Lookup};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "shortener.toml";

/// Main configuration structure matching shortener.toml
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Default length budget when --max is not given
    pub max_length: Option<usize>,

    /// Dictionary files in `abbreviation=full` format
    pub dictionaries: Vec<PathBuf>,

    /// Inline entries, full word to abbreviation
    pub abbreviations: BTreeMap<String, String>,
}

impl Config {
    /// Load configuration from shortener.toml in the given root directory
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);

        if !config_path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                Self::default()
            }
        }
    }

    /// Build the lookup from configured dictionaries, `extra` files and inline entries
    pub fn lookup(&self, root: &Path, extra: &[PathBuf]) -> Result<Lookup, DictionaryError> {
        let mut lookup = Lookup::new();

        for path in self.dictionaries.iter().chain(extra) {
            let path = if path.is_absolute() {
                path.clone()
            } else {
                root.join(path)
            };
            lookup.extend(Lookup::load(&path)?);
        }

        lookup.extend(
            self.abbreviations
                .iter()
                .map(|(full, abbreviation)| (full.as_str(), abbreviation.as_str()))
                .collect(),
        );

        Ok(lookup)
    }
}
