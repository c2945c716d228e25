//! @dose
//! purpose: This module defines the command-line interface for shortener using the clap
//!     derive macros. It specifies the commands (shorten, tokenize) and their arguments.
//!
//! when-editing:
//!     - !Each command struct must derive Args and be added to the Commands enum
//!     - !Global flags (root, verbose) are defined on Cli and propagate to all subcommands
//!     - --max has no default here; the config file supplies one when it is absent
//!
//! invariants:
//!     - The Cli struct is the root parser that clap uses to parse command-line arguments
//!     - PathBuf is used for all file/directory path arguments
//!
//! gotchas:
//!     - With no NAME arguments, both commands read names from stdin, one per line
//!     - --dict can be repeated; later files override earlier ones

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shortener")]
#[command(author, version, about = "Shorten identifiers to a length budget with an abbreviation dictionary")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding shortener.toml (defaults to current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Shorten names to fit a maximum length
    Shorten(ShortenArgs),

    /// Show how names are split into segments
    Tokenize(TokenizeArgs),
}

#[derive(Args, Default)]
pub struct ShortenArgs {
    /// Names to shorten (read from stdin when omitted)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Maximum length in characters (0 shortens every word)
    #[arg(short, long)]
    pub max: Option<usize>,

    /// Dictionary file with `abbreviation=word` lines (can be repeated)
    #[arg(short, long, value_name = "PATH")]
    pub dict: Vec<PathBuf>,
}

#[derive(Args, Default)]
pub struct TokenizeArgs {
    /// Names to split (read from stdin when omitted)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_shorten() {
        // Default values
        let cli = Cli::try_parse_from(["shortener", "shorten"]).unwrap();
        let Commands::Shorten(args) = cli.command else {
            panic!("Expected Shorten")
        };
        assert!(args.names.is_empty());
        assert!(args.max.is_none());
        assert!(args.dict.is_empty());

        // With names
        let cli =
            Cli::try_parse_from(["shortener", "shorten", "strategy-limited", "feature-x"]).unwrap();
        let Commands::Shorten(args) = cli.command else {
            panic!("Expected Shorten")
        };
        assert_eq!(args.names, vec!["strategy-limited", "feature-x"]);

        // --max and -m
        let cli = Cli::try_parse_from(["shortener", "shorten", "--max", "12", "a"]).unwrap();
        let Commands::Shorten(args) = cli.command else {
            panic!("Expected Shorten")
        };
        assert_eq!(args.max, Some(12));

        let cli = Cli::try_parse_from(["shortener", "shorten", "-m", "0", "a"]).unwrap();
        let Commands::Shorten(args) = cli.command else {
            panic!("Expected Shorten")
        };
        assert_eq!(args.max, Some(0));

        // Repeated dictionaries
        let cli = Cli::try_parse_from([
            "shortener",
            "shorten",
            "-d",
            "base.txt",
            "--dict",
            "team.txt",
            "a",
        ])
        .unwrap();
        let Commands::Shorten(args) = cli.command else {
            panic!("Expected Shorten")
        };
        assert_eq!(
            args.dict,
            vec![PathBuf::from("base.txt"), PathBuf::from("team.txt")]
        );
    }

    #[test]
    fn test_parse_tokenize() {
        let cli = Cli::try_parse_from(["shortener", "tokenize", "AaaBBbCcc"]).unwrap();
        let Commands::Tokenize(args) = cli.command else {
            panic!("Expected Tokenize")
        };
        assert_eq!(args.names, vec!["AaaBBbCcc"]);
    }

    /// Test global flags (-v, --verbose, -r, --root)
    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["shortener", "-v", "shorten"]).unwrap();
        assert!(cli.verbose);
        let cli = Cli::try_parse_from(["shortener", "--verbose", "tokenize"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["shortener", "-r", "/tmp/project", "shorten"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/project")));

        // Flags after command
        let cli = Cli::try_parse_from(["shortener", "shorten", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_error_cases() {
        assert!(Cli::try_parse_from(["shortener"]).is_err()); // Missing command
        assert!(Cli::try_parse_from(["shortener", "invalid"]).is_err()); // Invalid command
        assert!(Cli::try_parse_from(["shortener", "shorten", "--max", "-1"]).is_err());
        assert!(Cli::try_parse_from(["shortener", "shorten", "--max", "ten"]).is_err());
    }

    #[test]
    fn test_help_output() {
        let mut cmd = Cli::command();
        let help = format!("{}", cmd.render_help());
        assert!(help.contains("shorten"));
        assert!(help.contains("tokenize"));
    }
}
