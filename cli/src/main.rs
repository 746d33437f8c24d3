//! # kyntool Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file is the entry point of the kyntool CLI. It handles:
//! - Discovering subcommands from the `commands` namespace
//! - Composing and running the top-level argument parser
//! - Loading configuration and setting up logging
//! - Routing execution to the selected subcommand, or printing help
//!
//! ## Architecture
//!
//! Subcommands are not hard-wired here. Each module in `commands/` that
//! implements `core::subcommand::Subcommand` is listed in the namespace table,
//! discovered at startup and attached to the top-level parser under its
//! module name.
//!
//! ## Examples
//!
//! ```bash
//! # List available commands
//! kyntool
//!
//! # Run a command with increased verbosity
//! kyntool -v greet --name Ada
//! ```
//!
//! Exit codes:
//! - `0`: command succeeded, or help/version was shown
//! - `1`: startup failure (discovery, configuration) or the command failed
//! - `2`: usage error reported by the argument parser
//!
use anyhow::Context;
use clap::FromArgMatches;

mod commands; // Subcommand modules (the `commands` namespace)
mod core; // Dispatcher infrastructure (registry, dispatch, config, logging, errors)

use crate::core::dispatch::{Dispatcher, GlobalArgs, Outcome};
use crate::core::{config, logging, registry};

fn main() -> anyhow::Result<()> {
    let namespace = commands::namespace();
    let registry = registry::discover(&namespace).context("Failed to discover subcommands")?;
    let mut dispatcher = Dispatcher::new(registry).context("Failed to build the command parser")?;

    let matches = match dispatcher.parse(std::env::args_os()) {
        Ok(matches) => matches,
        Err(e) => e.exit(),
    };
    let globals = GlobalArgs::from_arg_matches(&matches)?;

    // Bare `kyntool` only prints help, so configuration is read on the
    // dispatch path alone.
    let cfg = if matches.subcommand().is_some() {
        config::load_config(globals.config.as_deref())?
    } else {
        config::Config::default()
    };

    logging::init(logging::level_for(
        globals.verbose,
        globals.quiet,
        cfg.logging.level.as_deref(),
    ));
    tracing::debug!("Parsed CLI arguments: {:?}", globals);
    registry::log_summary(&namespace, dispatcher.registry());
    for name in config::unknown_command_sections(&cfg, dispatcher.registry()) {
        tracing::warn!(
            "Configuration section [commands.{}] does not match any command.",
            name
        );
    }

    match dispatcher.dispatch(&matches, &cfg) {
        Ok(Outcome::Dispatched(name)) => {
            tracing::debug!("Command '{}' finished.", name);
        }
        Ok(Outcome::Help) => {
            print!("{}", dispatcher.render_help());
        }
        Err(e) => {
            tracing::error!("Command execution failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
