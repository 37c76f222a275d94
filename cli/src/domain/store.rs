//! # Quote Store
//!
//! File: cli/src/domain/store.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The in-memory collection of quotes loaded from a quotes file. The store is
//! populated once and is read-only afterwards; the underlying `Vec` is never
//! handed out mutably.
//!
//! ## Loading
//!
//! 1. Read the whole file as UTF-8 (`common::fs::io`). A missing or unreadable
//!    file is an error and no store is produced.
//! 2. Skip blank lines.
//! 3. Parse each remaining line with `Quote::parse_line`; malformed lines are
//!    skipped and logged at `debug` level.
//!
//! ## Printing
//!
//! `print_quote` picks a quote according to a `Selection` and writes
//! `"<text> — <speaker>"`, or `"No quotes available."` for an empty store.
//!
use crate::common::fs::io;
use crate::core::error::Result;
use crate::domain::quote::{Quote, Selection, DEFAULT_DELIMITER};
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Printed in place of a quote when the store is empty.
pub const NO_QUOTES_MESSAGE: &str = "No quotes available.";

/// Ordered, read-only collection of quotes (file order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// Loads quotes from `path` using the default `|` delimiter.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_delimiter(path, DEFAULT_DELIMITER)
    }

    pub fn load_with_delimiter(path: impl AsRef<Path>, delimiter: char) -> Result<Self> {
        let path = path.as_ref();
        let contents = io::read_file_to_string(path)?;
        let store = Self::parse(&contents, delimiter);
        info!("Loaded {} quote(s) from {}", store.len(), path.display());
        Ok(store)
    }

    /// Builds a store from file contents without touching the filesystem.
    pub fn parse(contents: &str, delimiter: char) -> Self {
        let mut quotes = Vec::new();
        let mut skipped = 0usize;
        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Quote::parse_line(line, delimiter) {
                Some(quote) => quotes.push(quote),
                None => {
                    skipped += 1;
                    debug!("Skipping malformed quote on line {}: {:?}", index + 1, line);
                }
            }
        }
        if skipped > 0 {
            debug!("Skipped {} malformed line(s)", skipped);
        }
        Self { quotes }
    }

    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    pub fn first(&self) -> Option<&Quote> {
        self.quotes.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }

    /// Chooses one quote, or `None` if the store is empty.
    pub fn pick<R: Rng + ?Sized>(&self, selection: Selection, rng: &mut R) -> Option<&Quote> {
        match selection {
            Selection::Random => self.quotes.choose(rng),
            Selection::First => self.quotes.first(),
        }
    }

    /// The line `print_quote` would write, without the trailing newline.
    pub fn render_pick<R: Rng + ?Sized>(&self, selection: Selection, rng: &mut R) -> String {
        match self.pick(selection, rng) {
            Some(quote) => quote.to_string(),
            None => {
                info!("Quote store is empty");
                NO_QUOTES_MESSAGE.to_string()
            }
        }
    }

    pub fn print_quote<W, R>(&self, selection: Selection, rng: &mut R, out: &mut W) -> Result<()>
    where
        W: Write,
        R: Rng + ?Sized,
    {
        writeln!(out, "{}", self.render_pick(selection, rng))?;
        Ok(())
    }

    /// Prints a uniformly random quote to `out`.
    pub fn print_random_quote<W: Write>(&self, out: &mut W) -> Result<()> {
        self.print_quote(Selection::Random, &mut rand::thread_rng(), out)
    }
}

impl<'a> IntoIterator for &'a QuoteStore {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ClassesError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
Live long and prosper|Spock
Resistance is futile
Make it so|Picard

So say|we all|Adama
I'll be back|The Terminator
";

    #[test]
    fn counts_only_well_formed_lines() {
        let store = QuoteStore::parse(SAMPLE, '|');
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0), Some(&Quote::new("Live long and prosper", "Spock")));
        assert_eq!(store.get(1).map(Quote::speaker), Some("Picard"));
        assert_eq!(store.get(2).map(Quote::speaker), Some("The Terminator"));
        assert!(store.get(3).is_none());
    }

    #[test]
    fn handles_crlf_line_endings() {
        let store = QuoteStore::parse("Make it so|Picard\r\nEngage|Picard\r\n", '|');
        let speakers: Vec<_> = store.iter().map(Quote::speaker).collect();
        assert_eq!(speakers, ["Picard", "Picard"]);
    }

    #[test]
    fn loads_from_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("quotes.txt");
        fs::write(&path, SAMPLE)?;

        let store = QuoteStore::load(&path)?;
        assert_eq!(store.len(), 3);
        assert_eq!(store.first().map(Quote::text), Some("Live long and prosper"));
        Ok(())
    }

    #[test]
    fn loads_with_custom_delimiter() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("quotes.txt");
        fs::write(&path, "Engage;Picard\nMake it so|Picard\n")?;

        let store = QuoteStore::load_with_delimiter(&path, ';')?;
        assert_eq!(store.len(), 1);
        Ok(())
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempdir().unwrap();
        let err = QuoteStore::load(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClassesError>(),
            Some(ClassesError::FileNotFound { .. })
        ));
    }

    #[test]
    fn random_pick_comes_from_store() {
        let store = QuoteStore::parse(SAMPLE, '|');
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = store.pick(Selection::Random, &mut rng).unwrap();
            assert!(store.iter().any(|q| q == picked));
        }
    }

    #[test]
    fn first_pick_is_file_order() {
        let store = QuoteStore::parse(SAMPLE, '|');
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            store.render_pick(Selection::First, &mut rng),
            "Live long and prosper — Spock"
        );
    }

    #[test]
    fn single_quote_prints_exactly() -> Result<()> {
        let store = QuoteStore::parse("Live long and prosper|Spock\n", '|');
        let mut out = Vec::new();
        store.print_random_quote(&mut out)?;
        assert_eq!(String::from_utf8(out)?, "Live long and prosper — Spock\n");
        Ok(())
    }

    #[test]
    fn empty_store_prints_message() -> Result<()> {
        let store = QuoteStore::default();
        assert!(store.is_empty());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(store.pick(Selection::Random, &mut rng).is_none());

        let mut out = Vec::new();
        store.print_quote(Selection::First, &mut rng, &mut out)?;
        assert_eq!(String::from_utf8(out)?, format!("{}\n", NO_QUOTES_MESSAGE));
        Ok(())
    }

    #[test]
    fn iterates_in_insertion_order() {
        let store = QuoteStore::from_quotes(vec![
            Quote::new("One", "A"),
            Quote::new("Two", "B"),
        ]);
        let texts: Vec<&str> = (&store).into_iter().map(Quote::text).collect();
        assert_eq!(texts, ["One", "Two"]);
    }
}
