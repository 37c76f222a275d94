//! # Classes Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level command groups of the Classes CLI and
//! makes them accessible to the main entry point (`main.rs`).
//!
//! ## Command Groups
//!
//! - `quote`: Print a quote from the quotes file, or list them all
//! - `greet`: Produce a greeting from a `Person`
//!
//! Each command group defines its own arguments structure and handler function.
//!

/// Command group for greetings. Prints one greeting line.
pub mod greet;
/// Command group for the quotes file. Includes subcommands `random` and `list`.
pub mod quote;
