//! # Classes Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities used by both the domain layer (`domain::`) and core
//! infrastructure (`core::`). Currently this is filesystem I/O only.
//!

/// Utilities for filesystem operations.
pub mod fs;
