//! # Classes Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Filesystem helpers shared by the quote store and the configuration loader.
//!
//! - **`io`**: Reading text files with errors mapped onto `ClassesError`.
//!
//! ```ignore
//! use crate::common::fs::io;
//! let content = io::read_file_to_string(Path::new(".classes.toml"))?;
//! ```
//!

/// Text file reads with contextual errors.
pub mod io;
