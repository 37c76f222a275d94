//! # Classes Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for Classes, handling loading,
//! merging, validation, and access to configuration data. It combines defaults,
//! user settings, and project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.classes.toml` in current directory or ancestors
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/classes/config.toml`)
//! 3. Default values defined in the code
//!
//! Each file is read as a `ConfigFile` whose settings are all optional. Layers
//! merge field by field (a value set in a higher layer always wins, even when
//! it equals the default) and defaults are applied only after merging. A
//! relative `quotes.file` is anchored to the directory of the file that
//! declared it, so a project config found in an ancestor still points at the
//! right quotes file.
//!
//! Command-line flags (and the `CLASSES_QUOTES_FILE` environment variable)
//! are applied on top by the command handlers, relative to the current
//! directory.
//!
//! ## Examples
//!
//! ```toml
//! [quotes]
//! file = "~/quotes/scifi.txt"
//! delimiter = "|"
//! selection = "random"
//!
//! [person]
//! name = "Ada"
//! ```
//!
//! ```ignore
//! let cfg = config::load_config()?;
//! let delimiter = cfg.quotes.delimiter()?;
//! let store = QuoteStore::load_with_delimiter(&cfg.quotes.file, delimiter)?;
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{ClassesError, Result};
use crate::domain::quote::{Selection, DEFAULT_DELIMITER};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Represents the effective configuration after all sources are merged and
/// defaults applied.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub quotes: QuotesConfig,
    pub person: PersonConfig,
}

/// Settings for the quote printer (`classes quote ...`).
#[derive(Debug, Clone, PartialEq)]
pub struct QuotesConfig {
    /// Path of the quotes file, `~`-expanded. A relative path declared in a
    /// config file is already anchored to that file's directory.
    pub file: String,
    /// Field separator between quote text and speaker. Exactly one character.
    pub delimiter: String,
    /// How the quote to print is chosen.
    pub selection: Selection,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            file: default_quotes_file(),
            delimiter: default_delimiter(),
            selection: Selection::default(),
        }
    }
}

impl QuotesConfig {
    /// Returns the configured delimiter as a `char`.
    pub fn delimiter(&self) -> Result<char> {
        parse_delimiter(&self.delimiter)
    }
}

/// Settings for `classes greet`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PersonConfig {
    /// Name used when `--name` is not given.
    pub name: Option<String>,
}

/// One configuration file as written on disk. Every setting is optional so
/// that an explicit value, even one equal to the default, overrides a
/// lower-precedence file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct ConfigFile {
    #[serde(default)]
    pub quotes: QuotesFile,
    #[serde(default)]
    pub person: PersonConfig,
}

/// The `[quotes]` table of a configuration file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct QuotesFile {
    pub file: Option<String>,
    pub delimiter: Option<String>,
    pub selection: Option<Selection>,
}

impl ConfigFile {
    /// Expands `~` in `quotes.file` and joins a relative result onto `base`,
    /// the directory of the file this layer was read from.
    fn anchor_paths(&mut self, base: Option<&Path>) {
        if let Some(file) = self.quotes.file.as_mut() {
            *file = resolve_file(file, base);
            debug!("Resolved quotes file path: {}", file);
        }
    }

    /// Field-wise merge where `self` takes precedence over `lower`.
    fn over(self, lower: ConfigFile) -> ConfigFile {
        ConfigFile {
            quotes: QuotesFile {
                file: self.quotes.file.or(lower.quotes.file),
                delimiter: self.quotes.delimiter.or(lower.quotes.delimiter),
                selection: self.quotes.selection.or(lower.quotes.selection),
            },
            person: PersonConfig {
                name: self.person.name.or(lower.person.name),
            },
        }
    }

    /// Fills unset settings with the built-in defaults.
    fn into_config(self) -> Config {
        Config {
            quotes: QuotesConfig {
                file: self.quotes.file.unwrap_or_else(default_quotes_file),
                delimiter: self.quotes.delimiter.unwrap_or_else(default_delimiter),
                selection: self.quotes.selection.unwrap_or_default(),
            },
            person: self.person,
        }
    }
}

fn default_quotes_file() -> String {
    "quotes.txt".to_string()
}
fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".classes.toml";

/// Checks that `raw` is a single, non-whitespace character and returns it.
pub fn parse_delimiter(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Ok(c),
        _ => Err(anyhow!(ClassesError::Config(format!(
            "Invalid delimiter '{}'. Expected exactly one non-whitespace character.",
            raw
        )))),
    }
}

pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let user_config = load_user_config()?;
    let project_config = load_project_config(&current_dir)?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Classes", "classes") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<ConfigFile>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file (.classes.toml) found in current directory or ancestors."
        );
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = io::read_file_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut layer: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    layer.anchor_paths(path.parent());
    Ok(layer)
}

fn merge_configs(user: ConfigFile, project: Option<ConfigFile>) -> Config {
    match project {
        Some(project_cfg) => project_cfg.over(user).into_config(),
        None => user.into_config(),
    }
}

fn resolve_file(raw: &str, base: Option<&Path>) -> String {
    let expanded = shellexpand::tilde(raw).into_owned();
    match base {
        Some(base) if Path::new(&expanded).is_relative() => {
            base.join(&expanded).to_string_lossy().into_owned()
        }
        _ => expanded,
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.quotes.file.trim().is_empty() {
        return Err(anyhow!(ClassesError::Config(
            "Quotes file path cannot be empty.".to_string()
        )));
    }
    parse_delimiter(&config.quotes.delimiter)?;
    info!("Configuration validation successful.");
    Ok(())
}
