//! # kyntool Greet Command
//!
//! File: cli/src/commands/greet.rs
//!
//! ## Overview
//!
//! Implements `kyntool greet`, a template subcommand that prints a greeting.
//! It shows the three things a subcommand module needs: an argument struct,
//! a `Subcommand` implementation providing the parser fragment and handler,
//! and (optionally) typed settings read from `[commands.greet]`.
//!
//! ## Examples
//!
//! ```bash
//! kyntool greet
//! # Hello, world!
//!
//! kyntool greet --name Ada --count 2 --shout
//! # HELLO, ADA!
//! # HELLO, ADA!
//! ```
//!
//! With a configuration file:
//!
//! ```toml
//! [commands.greet]
//! name = "team"
//! shout = true
//! ```
//!
//! `--no-shout` turns a configured `shout = true` off for a single run.
//!
use crate::commands::shared;
use crate::core::error::Result;
use crate::core::subcommand::{Invocation, Subcommand};
use clap::{Args, Command};
use serde::Deserialize;
use std::io::Write;
use tracing::debug;

const DEFAULT_NAME: &str = "world";

/// Arguments accepted by `kyntool greet`.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct GreetArgs {
    /// Who to greet (defaults to `name` from [commands.greet], then "world")
    #[arg(short, long)]
    pub name: Option<String>,

    /// How many times to print the greeting
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Print the greeting in upper case
    #[arg(long, overrides_with = "no_shout")]
    pub shout: bool,

    /// Keep the original case, even if `shout = true` is configured
    #[arg(long, overrides_with = "shout")]
    pub no_shout: bool,
}

/// The `[commands.greet]` configuration table.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GreetSettings {
    pub name: Option<String>,
    #[serde(default)]
    pub shout: bool,
}

/// Provider registered in the `commands` namespace.
pub static COMMAND: GreetCommand = GreetCommand;

pub struct GreetCommand;

impl Subcommand for GreetCommand {
    fn fragment(&self) -> Command {
        GreetArgs::augment_args(Command::new("greet").about("Print a greeting"))
    }

    fn run(&self, invocation: &Invocation<'_>) -> Result<()> {
        let args: GreetArgs = invocation.args()?;
        let settings: GreetSettings = invocation.settings()?;
        debug!("greet args: {:?}, settings: {:?}", args, settings);
        greet(&args, &settings, &mut std::io::stdout().lock())
    }
}

/// Writes the greeting `args.count` times. Flags win over settings.
fn greet(args: &GreetArgs, settings: &GreetSettings, out: &mut impl Write) -> Result<()> {
    let name = args
        .name
        .as_deref()
        .or(settings.name.as_deref())
        .unwrap_or(DEFAULT_NAME);
    let shout = !args.no_shout && (args.shout || settings.shout);
    let line = shared::apply_case(&format!("Hello, {}!", name), shout);
    for _ in 0..args.count {
        shared::write_text(out, &line, true)?;
    }
    Ok(())
}
