//! # Classes Library Interface
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! Exposes the modules behind the `classes` binary so they can be used from
//! integration tests in `tests/` and from other crates.
//!
//! ```rust
//! use classes::domain::person::Person;
//! use classes::domain::store::QuoteStore;
//!
//! let store = QuoteStore::parse("Live long and prosper|Spock\n", '|');
//! assert_eq!(store.len(), 1);
//! assert_eq!(Person::greet_at_time("Ada", "morning"), "Good morning, Ada");
//! ```

pub mod commands; // Argument structs and handlers for `quote` and `greet`
pub mod common; // Shared utilities (fs)
pub mod core; // Core infrastructure (errors, config)
pub mod domain; // Person, Quote, QuoteStore
