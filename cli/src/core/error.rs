//! # kyntool Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types raised by the dispatcher itself:
//! discovery of the subcommand namespace, composition of the top-level parser,
//! configuration loading, and routing. Errors raised by subcommand handlers are
//! not wrapped here; they travel as plain `anyhow::Error` values.
//!
//! ## Architecture
//!
//! - `CliError`: a `thiserror` enum for the dispatcher's failure kinds.
//! - `Result<T>`: an alias for `anyhow::Result<T>` used across the crate.
//!
//! Argument parsing failures are deliberately absent from `CliError`: they are
//! `clap::Error` values that the binary hands back to clap for printing and
//! exiting with clap's own exit code.
//!
//! ## Examples
//!
//! ```rust
//! if registry.get(name).is_some() {
//!     return Err(CliError::DuplicateSubcommand {
//!         name: name.to_string(),
//!         namespace: namespace.name().to_string(),
//!     })?;
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the kyntool dispatcher.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Module '{name}' in namespace '{namespace}' has an invalid subcommand name.")]
    InvalidSubcommandName { name: String, namespace: String },

    #[error("Subcommand '{name}' is registered more than once in namespace '{namespace}'.")]
    DuplicateSubcommand { name: String, namespace: String },

    #[error("Subcommand '{command}' declares '{flag}', which is reserved by the top-level parser.")]
    ReservedFlag { command: String, flag: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid settings for subcommand '{command}'")]
    InvalidSettings {
        command: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Subcommand '{0}' was parsed but is not in the registry.")]
    UnknownSubcommand(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
