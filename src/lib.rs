//! @dose
//! purpose: Library crate root for shortener. Shortens identifiers such as branch or resource
//!     names to a character budget using an abbreviation dictionary, keeping their word
//!     structure and casing. Usable both as a library and through the CLI.
//!
//! when-editing:
//!     - !All public modules must be declared here with pub mod
//!     - !tokenizer, shortener, sequence, dictionary and text do no I/O; keep it that way
//!     - Keep the re-export list organized by module
//!
//! invariants:
//!     - The public API surface is stable - all re-exported items are public contract
//!
//! gotchas:
//!     - The lib.rs is separate from main.rs - library consumers get lib, CLI gets main
//!
//! ```
//! use shortener::{shorten, Lookup};
//!
//! let lookup = Lookup::parse("stg=strategy\nltd=limited");
//! assert_eq!(shorten(&lookup, "strategy-limited", 12), "strategy-ltd");
//! assert_eq!(shorten(&lookup, "strategy-limited", 0), "stg-ltd");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod dictionary;
pub mod sequence;
pub mod shortener;
pub mod text;
pub mod tokenizer;

// Re-export main types for convenience
pub use cli::{Cli, Commands, ShortenArgs, TokenizeArgs};
pub use config::Config;
pub use dictionary::{DictionaryError, Lookup};
pub use sequence::Sequence;
pub use shortener::{shorten, shorten_word};
pub use tokenizer::{is_separator, tokenize};
