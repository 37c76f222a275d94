//! # Classes Quote Random Command
//!
//! File: cli/src/commands/quote/random.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `classes quote random` (and the bare `classes` invocation):
//! load the quotes file, choose one quote and print
//! `"<text> — <speaker>"` to stdout.
//!
//! 1. Load configuration
//! 2. Load the quote store (missing file is an error, exit code 1)
//! 3. Choose by `--first`, else by `quotes.selection` (default random)
//! 4. Print the quote, or `No quotes available.` for an empty file
//!
use super::SourceArgs;
use crate::core::config;
use crate::core::error::Result;
use crate::domain::quote::Selection;
use clap::Parser;
use std::io;
use tracing::info;

/// # Random Quote Arguments (`RandomArgs`)
#[derive(Parser, Debug)]
pub struct RandomArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the first quote in file order instead of a random one.
    #[arg(long)]
    pub first: bool,
}

pub fn handle_random(args: RandomArgs) -> Result<()> {
    info!("Handling quote random command with args: {:?}", args);
    let cfg = config::load_config()?;
    let store = args.source.load_store(&cfg)?;

    let selection = if args.first {
        Selection::First
    } else {
        cfg.quotes.selection
    };

    let mut stdout = io::stdout().lock();
    store.print_quote(selection, &mut rand::thread_rng(), &mut stdout)
}
