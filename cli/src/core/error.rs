//! # Classes Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Classes CLI.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ClassesError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! Only a few failure classes exist:
//! - A file (quotes or configuration) is missing or cannot be read
//! - The configuration is invalid
//! - A command-line argument is out of range
//!
//! Malformed quote lines are *not* errors; the store skips them. An empty
//! store is not an error either; it prints an informational message.
//!
//! ## Examples
//!
//! ```ignore
//! // Pattern matching on error types
//! match QuoteStore::load(&path) {
//!     Ok(store) => println!("{} quotes", store.len()),
//!     Err(e) if e.downcast_ref::<ClassesError>().map_or(false, |ce| matches!(ce, ClassesError::FileNotFound { .. })) => {
//!         println!("No quotes file yet.");
//!     },
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the Classes application.
#[derive(Error, Debug)]
pub enum ClassesError {
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("File '{}' could not be read: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
