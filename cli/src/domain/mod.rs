//! # Classes Domain Types
//!
//! File: cli/src/domain/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The two independent components the CLI exposes:
//!
//! - `person`: `Person`, a named entity producing greeting strings, plus the
//!   `TimeOfDay` helper.
//! - `quote`: `Quote`, one parsed `text|speaker` line, and the `Selection`
//!   strategy.
//! - `store`: `QuoteStore`, the read-only collection loaded from a quotes file.
//!
//! Nothing here prints directly except through a caller-supplied writer, so
//! the command modules decide where output goes.
//!

/// Greeting `Person` and `TimeOfDay`.
pub mod person;
/// `Quote` parsing and `Selection`.
pub mod quote;
/// `QuoteStore` loading and printing.
pub mod store;
