//! # Classes Quote Command Group
//!
//! File: cli/src/commands/quote/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module serves as the entry point and router for the `classes quote`
//! command group. It defines the available subcommands (`random`, `list`) and
//! the arguments both share for locating the quotes file.
//!
//! ## Architecture
//!
//! - `QuoteArgs`: Top-level arguments for the command group.
//! - `QuoteCommand`: Enum defining all quote subcommands.
//! - `SourceArgs`: `--file` / `--delimiter`, flattened into each subcommand.
//! - `handle_quote`: Routes execution to the relevant subcommand handler.
//! - `handle_default`: What `classes` does with no subcommand at all.
//!
//! ## Examples
//!
//! ```bash
//! # Print one random quote from the configured file
//! classes quote random
//!
//! # Always print the first quote of a specific file
//! classes quote random --first --file ./scifi.txt
//!
//! # List every quote, using ';' as the field separator
//! classes quote list --delimiter ';'
//! ```
//!
//! The quotes file is resolved in this order: `--file`, the
//! `CLASSES_QUOTES_FILE` environment variable, then `quotes.file` from the
//! configuration (default `quotes.txt`).
//!
use crate::core::config::{self, Config};
use crate::core::error::Result;
use crate::domain::store::QuoteStore;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// Contains the handler and arguments for `classes quote list`.
mod list;
/// Contains the handler and arguments for `classes quote random`.
mod random;

/// Arguments locating and parsing the quotes file, shared by all subcommands.
#[derive(Args, Debug, Default, Clone)]
pub struct SourceArgs {
    /// Path of the quotes file. Overrides `quotes.file` from the configuration.
    #[arg(long, short, env = "CLASSES_QUOTES_FILE")]
    pub file: Option<PathBuf>,

    /// Character separating the quote text from the speaker. Overrides `quotes.delimiter`.
    #[arg(long, short)]
    pub delimiter: Option<char>,
}

impl SourceArgs {
    /// Resolves the file path and delimiter against `cfg` and loads the store.
    pub fn load_store(&self, cfg: &Config) -> Result<QuoteStore> {
        let path = self
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(&cfg.quotes.file));
        let delimiter = match self.delimiter {
            Some(d) => config::parse_delimiter(&d.to_string())?,
            None => cfg.quotes.delimiter()?,
        };
        debug!("Loading quotes from {} (delimiter {:?})", path.display(), delimiter);
        QuoteStore::load_with_delimiter(&path, delimiter)
    }
}

/// # Quote Command Group Arguments (`QuoteArgs`)
#[derive(Parser, Debug)]
pub struct QuoteArgs {
    /// The specific quote subcommand to execute.
    #[command(subcommand)]
    command: QuoteCommand,
}

/// # Quote Subcommands (`QuoteCommand`)
#[derive(Subcommand, Debug)]
enum QuoteCommand {
    /// Print one quote (random unless configured or told otherwise).
    Random(random::RandomArgs),
    /// List every quote in file order.
    List(list::ListArgs),
}

/// # Handle Quote Command (`handle_quote`)
///
/// Dispatches `classes quote <subcommand>` to the matching handler and
/// propagates its `Result`.
pub fn handle_quote(args: QuoteArgs) -> Result<()> {
    match args.command {
        QuoteCommand::Random(args) => random::handle_random(args)?,
        QuoteCommand::List(args) => list::handle_list(args)?,
    }
    Ok(())
}

/// Runs `classes quote random` with no flags. Used when `classes` is invoked
/// without a subcommand. Parsing an empty argument list still picks up
/// `CLASSES_QUOTES_FILE`.
pub fn handle_default() -> Result<()> {
    let args = random::RandomArgs::try_parse_from(["random"])?;
    random::handle_random(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::QuotesConfig;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parses_quote_random() {
        let result = QuoteArgs::try_parse_from(["quote", "random", "--first"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            QuoteCommand::Random(args) => assert!(args.first),
            _ => panic!("Incorrect subcommand parsed for 'random'"),
        }
    }

    #[test]
    fn test_parses_quote_list_with_source() {
        let result = QuoteArgs::try_parse_from([
            "quote",
            "list",
            "--file",
            "scifi.txt",
            "--delimiter",
            ";",
        ]);
        match result.expect("list should parse").command {
            QuoteCommand::List(args) => {
                assert_eq!(args.source.file, Some(PathBuf::from("scifi.txt")));
                assert_eq!(args.source.delimiter, Some(';'));
            }
            _ => panic!("Incorrect subcommand parsed for 'list'"),
        }
    }

    #[test]
    fn test_rejects_multi_char_delimiter() {
        let result = QuoteArgs::try_parse_from(["quote", "list", "--delimiter", "::"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_source_args_override_config() -> Result<()> {
        let dir = tempdir()?;
        let flag_file = dir.path().join("flag.txt");
        fs::write(&flag_file, "Engage;Picard\n")?;

        let cfg = Config {
            quotes: QuotesConfig {
                file: dir.path().join("missing.txt").to_string_lossy().into_owned(),
                ..Default::default()
            },
            ..Default::default()
        };
        let source = SourceArgs {
            file: Some(flag_file),
            delimiter: Some(';'),
        };

        let store = source.load_store(&cfg)?;
        assert_eq!(store.len(), 1);
        Ok(())
    }

    #[test]
    fn test_source_args_fall_back_to_config() -> Result<()> {
        let dir = tempdir()?;
        let cfg_file = dir.path().join("configured.txt");
        fs::write(&cfg_file, "Make it so|Picard\nEngage|Picard\n")?;

        let cfg = Config {
            quotes: QuotesConfig {
                file: cfg_file.to_string_lossy().into_owned(),
                ..Default::default()
            },
            ..Default::default()
        };

        let store = SourceArgs::default().load_store(&cfg)?;
        assert_eq!(store.len(), 2);
        Ok(())
    }

    #[test]
    fn test_whitespace_delimiter_rejected() {
        let source = SourceArgs {
            file: Some(PathBuf::from("irrelevant.txt")),
            delimiter: Some(' '),
        };
        assert!(source.load_store(&Config::default()).is_err());
    }
}
