//! # Classes Quote List Command
//!
//! File: cli/src/commands/quote/list.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `classes quote list`, which prints every quote of the quotes
//! file in file order, numbered from 1.
//!
//! Example output:
//!
//! ```text
//!   1. Live long and prosper — Spock
//!   2. Make it so — Picard
//!
//! Found 2 quote(s).
//! ```
//!
use super::SourceArgs;
use crate::core::config;
use crate::core::error::Result;
use crate::domain::store::{QuoteStore, NO_QUOTES_MESSAGE};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

/// # List Quote Arguments (`ListArgs`)
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn handle_list(args: ListArgs) -> Result<()> {
    info!("Handling quote list command with args: {:?}", args);
    let cfg = config::load_config()?;
    let store = args.source.load_store(&cfg)?;

    let mut stdout = io::stdout().lock();
    write_list(&store, &mut stdout)
}

fn write_list<W: Write>(store: &QuoteStore, out: &mut W) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "{}", NO_QUOTES_MESSAGE)?;
        return Ok(());
    }
    for (index, quote) in store.iter().enumerate() {
        writeln!(out, "{:>3}. {}", index + 1, quote)?;
    }
    writeln!(out)?;
    writeln!(out, "Found {} quote(s).", store.len())?;
    Ok(())
}
