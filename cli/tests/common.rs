//! # Classes CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`quote.rs`, `greet.rs`, ...).
//! Every command built here runs inside a scratch directory with its own
//! `HOME` / `XDG_CONFIG_HOME`, so a developer's real `.classes.toml` or user
//! config never leaks into a test.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an `assert_cmd::Command` for the compiled `classes` binary.
///
/// ## Panics
/// Panics if the `classes` binary cannot be found via `Command::cargo_bin`.
pub fn classes_cmd() -> Command {
    Command::cargo_bin("classes").expect("Failed to find classes binary for testing")
}

/// A scratch working directory with an isolated config home.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create sandbox dir");
        // Stops the project config search from walking above the sandbox.
        fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `contents` to `name` inside the sandbox and returns its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write sandbox file");
        path
    }

    /// `classes` running in the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = classes_cmd();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env_remove("CLASSES_QUOTES_FILE")
            .env_remove("RUST_LOG");
        cmd
    }
}
