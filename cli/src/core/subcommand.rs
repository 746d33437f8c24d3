//! # kyntool Subcommand Capability
//!
//! File: cli/src/core/subcommand.rs
//!
//! ## Overview
//!
//! This module defines the `Subcommand` trait, the typed capability a module
//! implements to take part in the CLI. A provider contributes two things:
//!
//! - a **parser fragment** (`fragment`), the `clap::Command` holding the
//!   subcommand's own flags and arguments, built without any input;
//! - a **handler** (`run`), called with an `Invocation` once argv has been
//!   parsed and this subcommand was selected.
//!
//! Modules opt in by implementing the trait and listing themselves in the
//! namespace table (`commands::namespace()`); discovery only reads that table.
//!
//! ## Examples
//!
//! ```rust
//! #[derive(clap::Args, Debug)]
//! pub struct PingArgs {
//!     #[arg(long)]
//!     pub host: String,
//! }
//!
//! pub static COMMAND: PingCommand = PingCommand;
//! pub struct PingCommand;
//!
//! impl Subcommand for PingCommand {
//!     fn fragment(&self) -> clap::Command {
//!         PingArgs::augment_args(clap::Command::new("ping"))
//!     }
//!
//!     fn run(&self, invocation: &Invocation<'_>) -> Result<()> {
//!         let args: PingArgs = invocation.args()?;
//!         println!("ping {}", args.host);
//!         Ok(())
//!     }
//! }
//! ```
//!
use crate::core::config::Config;
use crate::core::error::{CliError, Result};
use clap::{ArgMatches, Command, FromArgMatches};
use serde::de::DeserializeOwned;

/// A parser-fragment provider: the capability that turns a module into a subcommand.
///
/// Implementors are stored as `&'static dyn Subcommand` in the namespace
/// table, hence the `Sync` bound.
pub trait Subcommand: Sync {
    /// Builds this subcommand's parser fragment.
    ///
    /// The dispatcher renames the returned command to the module's registered
    /// name, so the name passed to `Command::new` here only matters for
    /// standalone use of the fragment.
    fn fragment(&self) -> Command;

    /// Runs the subcommand. Errors are returned to the binary untouched.
    fn run(&self, invocation: &Invocation<'_>) -> Result<()>;
}

/// Everything a handler gets to see about the current run.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    command: &'a str,
    matches: &'a ArgMatches,
    global: &'a ArgMatches,
    config: &'a Config,
}

impl<'a> Invocation<'a> {
    pub fn new(
        command: &'a str,
        matches: &'a ArgMatches,
        global: &'a ArgMatches,
        config: &'a Config,
    ) -> Self {
        Self {
            command,
            matches,
            global,
            config,
        }
    }

    /// Registered name of the selected subcommand.
    pub fn command(&self) -> &'a str {
        self.command
    }

    /// Matches for the subcommand's own fragment. Global flags are visible
    /// here as well, since clap propagates them to every level.
    pub fn matches(&self) -> &'a ArgMatches {
        self.matches
    }

    /// Matches for the whole command line, starting at the top-level parser.
    pub fn global(&self) -> &'a ArgMatches {
        self.global
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    /// Extracts a derive-based argument struct from the subcommand matches.
    pub fn args<A: FromArgMatches>(&self) -> Result<A> {
        Ok(A::from_arg_matches(self.matches)?)
    }

    /// # Typed Subcommand Settings (`settings`)
    ///
    /// Deserializes the `[commands.<name>]` table of the loaded configuration
    /// into `T`. A missing table yields `T::default()`.
    ///
    /// ## Returns
    ///
    /// * `Err(CliError::InvalidSettings)` if the table does not fit `T`.
    pub fn settings<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.config().command_settings(self.command()) {
            None => Ok(T::default()),
            Some(table) => toml::Value::Table(table.clone())
                .try_into()
                .map_err(|source| {
                    CliError::InvalidSettings {
                        command: self.command().to_string(),
                        source,
                    }
                    .into()
                }),
        }
    }
}
