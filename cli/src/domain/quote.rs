//! # Quote
//!
//! File: cli/src/domain/quote.rs
//! Author: Christi Mahu
//!
//! A single quotation and its speaker, parsed from one line of a quotes file:
//!
//! ```text
//! Live long and prosper|Spock
//! ```
//!
//! A line must split into exactly two non-empty fields on the delimiter. A
//! delimiter inside the quote text is not supported; such a line has three
//! fields and is rejected.

use serde::Deserialize;
use std::fmt;

/// Field separator used when none is configured.
pub const DEFAULT_DELIMITER: char = '|';

/// An immutable quotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    text: String,
    speaker: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, speaker: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker: speaker.into(),
        }
    }

    /// Parses `text<delimiter>speaker`. Returns `None` for malformed lines.
    pub fn parse_line(line: &str, delimiter: char) -> Option<Self> {
        let mut fields = line.split(delimiter);
        let (text, speaker) = match (fields.next(), fields.next(), fields.next()) {
            (Some(text), Some(speaker), None) => (text.trim(), speaker.trim()),
            _ => return None,
        };
        if text.is_empty() || speaker.is_empty() {
            return None;
        }
        Some(Self::new(text, speaker))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn speaker(&self) -> &str {
        &self.speaker
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {}", self.text, self.speaker)
    }
}

/// How a quote is chosen from the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// Uniformly at random.
    #[default]
    Random,
    /// Always the first quote in file order.
    First,
}
