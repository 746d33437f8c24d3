//! # kyntool Dispatcher
//!
//! File: cli/src/core/dispatch.rs
//!
//! ## Overview
//!
//! The dispatcher turns a `Registry` into one top-level `clap::Command`,
//! parses argv against it and routes to the selected subcommand's handler.
//!
//! ## Architecture
//!
//! - The top-level parser owns the global flags (`GlobalArgs`) and an optional
//!   command selector whose only accepted values are the registry's names.
//!   clap's implicit `help` subcommand is disabled for that reason.
//! - Each registered fragment is attached as a sub-parser. Fragments may not
//!   reuse a flag of the top-level parser (long name, short name or argument
//!   id); such a fragment makes `Dispatcher::new` fail.
//! - Parse errors stay `clap::Error` values so the binary can let clap print
//!   them and pick the exit code (2 for usage errors, 0 for `--help`).
//!
//! ## Examples
//!
//! ```rust
//! let registry = registry::discover(&commands::namespace())?;
//! let mut dispatcher = Dispatcher::new(registry)?;
//! let matches = dispatcher.parse(["kyntool", "greet", "--name", "Ada"])?;
//! match dispatcher.dispatch(&matches, &Config::default())? {
//!     Outcome::Dispatched(name) => tracing::debug!("ran {}", name),
//!     Outcome::Help => print!("{}", dispatcher.render_help()),
//! }
//! ```
//!
use crate::core::config::Config;
use crate::core::error::{CliError, Result};
use crate::core::registry::{Registry, SubcommandEntry};
use crate::core::subcommand::Invocation;
use clap::{ArgAction, ArgMatches, Args, Command};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, info};

/// Top-level description shown in `--help`.
pub const ABOUT: &str = "Xpedition / KYN netlist tools";

// Flags owned by the top-level parser, accepted before or after the command.
// A `///` doc here would become the parser's `about` through `augment_args`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct GlobalArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of the user and project files
    #[arg(short, long, global = true, env = "KYNTOOL_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// What `Dispatcher::dispatch` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The named subcommand's handler ran and returned `Ok`.
    Dispatched(&'static str),
    /// No command was given; the caller should show top-level help.
    Help,
}

/// The composed parser together with the registry it was built from.
pub struct Dispatcher {
    registry: Registry,
    parser: Command,
}

impl Dispatcher {
    /// # Build Dispatcher (`new`)
    ///
    /// Composes the top-level parser from `registry`, one sub-parser per entry,
    /// in registry order.
    ///
    /// ## Returns
    ///
    /// * `Err(CliError::ReservedFlag)` if a fragment declares an argument that
    ///   clashes with a top-level flag.
    pub fn new(registry: Registry) -> Result<Self> {
        let mut parser = top_level_parser();
        let reserved = ReservedFlags::of(&parser);
        for entry in registry.iter() {
            reserved.check(entry)?;
            parser = parser.subcommand(entry.fragment().clone());
        }
        Ok(Self { registry, parser })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Parses `argv` (program name first) against the composed parser.
    pub fn parse<I, T>(&mut self, argv: I) -> std::result::Result<ArgMatches, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.parser.try_get_matches_from_mut(argv)
    }

    /// # Dispatch (`dispatch`)
    ///
    /// Routes parsed matches to the selected subcommand.
    ///
    /// ## Arguments
    ///
    /// * `matches`: Top-level matches returned by `parse`.
    /// * `config`: The loaded configuration, handed to the handler.
    ///
    /// ## Returns
    ///
    /// * `Ok(Outcome::Dispatched(name))` after the handler returned `Ok`.
    /// * `Ok(Outcome::Help)` when no command was selected. No handler runs.
    /// * The handler's own error, unchanged, if it failed.
    /// * `Err(CliError::UnknownSubcommand)` if the matches name a command this
    ///   registry does not hold.
    pub fn dispatch(&self, matches: &ArgMatches, config: &Config) -> Result<Outcome> {
        let Some((name, sub_matches)) = matches.subcommand() else {
            debug!("No command given, showing top-level help.");
            return Ok(Outcome::Help);
        };

        let entry = self
            .registry
            .get(name)
            .ok_or_else(|| CliError::UnknownSubcommand(name.to_string()))?;

        info!("Dispatching to subcommand '{}'", entry.name());
        let invocation = Invocation::new(entry.name(), sub_matches, matches, config);
        debug!(
            "Invoking '{}' with arguments: {:?}",
            invocation.command(),
            invocation.global()
        );
        entry.handler().run(&invocation)?;
        Ok(Outcome::Dispatched(entry.name()))
    }

    /// Top-level help as plain text.
    pub fn render_help(&mut self) -> String {
        self.parser.render_help().to_string()
    }
}

fn top_level_parser() -> Command {
    let parser = Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .propagate_version(true)
        .subcommand_required(false)
        .disable_help_subcommand(true)
        .subcommand_value_name("COMMAND")
        .subcommand_help_heading("Commands");
    GlobalArgs::augment_args(parser).about(ABOUT)
}

/// Argument ids, long names and short names a fragment must not reuse.
struct ReservedFlags {
    ids: Vec<String>,
    longs: Vec<String>,
    shorts: Vec<char>,
}

impl ReservedFlags {
    fn of(parser: &Command) -> Self {
        // clap adds help and version flags while building, so they are not
        // yet among the parser's arguments.
        let mut reserved = Self {
            ids: vec!["help".to_string(), "version".to_string()],
            longs: vec!["help".to_string(), "version".to_string()],
            shorts: vec!['h', 'V'],
        };
        for arg in parser.get_arguments() {
            reserved.ids.push(arg.get_id().as_str().to_string());
            if let Some(long) = arg.get_long() {
                reserved.longs.push(long.to_string());
            }
            if let Some(short) = arg.get_short() {
                reserved.shorts.push(short);
            }
        }
        reserved
    }

    fn check(&self, entry: &SubcommandEntry) -> Result<()> {
        for arg in entry.fragment().get_arguments() {
            let id = arg.get_id().as_str();
            let reserved_long = arg
                .get_long()
                .filter(|long| self.longs.iter().any(|r| r.as_str() == *long));
            let reserved_short = arg.get_short().filter(|short| self.shorts.contains(short));

            let clash = if let Some(long) = reserved_long {
                Some(format!("--{}", long))
            } else if let Some(short) = reserved_short {
                Some(format!("-{}", short))
            } else if self.ids.iter().any(|r| r == id) {
                Some(id.to_string())
            } else {
                None
            };

            if let Some(flag) = clash {
                return Err(CliError::ReservedFlag {
                    command: entry.name().to_string(),
                    flag,
                }
                .into());
            }
        }
        Ok(())
    }
}
