//! # kyntool Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional TOML configuration that tunes logging and
//! carries per-subcommand settings. The dispatcher itself needs no
//! configuration to run; every field has a default.
//!
//! ## Architecture
//!
//! Configuration sources:
//! 1. An explicit file from `--config <PATH>` or `KYNTOOL_CONFIG`. When given,
//!    it is the only source.
//! 2. Otherwise, the project file `.kyntool.toml` in the current directory or
//!    an ancestor (the search stops at a `.git` directory), merged over
//! 3. the user file `config.toml` in the platform config directory.
//!
//! Project values override user values. `[commands.<name>]` tables merge key
//! by key, so a project can override one setting of a subcommand and inherit
//! the rest.
//!
//! ## Examples
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [commands.greet]
//! name = "team"
//! shout = true
//! ```
//!
use crate::core::error::{CliError, Result};
use crate::core::registry::Registry;
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Free-form settings tables, keyed by subcommand name.
    #[serde(default)]
    pub commands: BTreeMap<String, toml::Table>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of `LOG_LEVELS`. Used when neither `-v`/`-q` nor `RUST_LOG` is given.
    pub level: Option<String>,
}

impl Config {
    /// Settings table for a subcommand, if the configuration has one.
    pub fn command_settings(&self, name: &str) -> Option<&toml::Table> {
        self.commands.get(name)
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".kyntool.toml";
const USER_CONFIG_FILENAME: &str = "config.toml";

/// Accepted values for `logging.level`.
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// # Load Configuration (`load_config`)
///
/// Loads, merges and validates the configuration.
///
/// ## Arguments
///
/// * `explicit`: Path given with `--config` (or `KYNTOOL_CONFIG`). A leading
///   `~` is expanded. When present, user and project files are ignored.
///
/// ## Returns
///
/// * `Result<Config>`: The effective configuration, or an error if a file
///   cannot be read, is not valid TOML for this schema, or fails validation.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            let path = expand_path(path);
            debug!("Loading configuration from explicit path: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            let project_config = match find_project_config_path(&current_dir) {
                Some(path) => {
                    debug!("Loading project configuration from: {}", path.display());
                    Some(load_config_from_path(&path)?)
                }
                None => None,
            };
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("", "", "kyntool") else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join(USER_CONFIG_FILENAME);
    if config_path.is_file() {
        debug!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for
/// `.kyntool.toml`. A directory containing `.git` ends the search.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    let mut merged = user;
    if project.logging.level.is_some() {
        merged.logging.level = project.logging.level;
    }
    for (name, table) in project.commands {
        let settings = merged.commands.entry(name).or_default();
        for (key, value) in table {
            settings.insert(key, value);
        }
    }
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    if let Some(level) = &config.logging.level {
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(CliError::Config(format!(
                "Unknown log level '{}'. Expected one of: {}.",
                level,
                LOG_LEVELS.join(", ")
            ))
            .into());
        }
    }
    Ok(())
}

/// Names of `[commands.*]` sections that match no registered subcommand.
pub fn unknown_command_sections<'a>(config: &'a Config, registry: &Registry) -> Vec<&'a str> {
    config
        .commands
        .keys()
        .map(String::as_str)
        .filter(|name| registry.get(name).is_none())
        .collect()
}
