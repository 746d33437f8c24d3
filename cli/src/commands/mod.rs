//! # kyntool Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module is the `commands` namespace: the set of modules the dispatcher
//! discovers subcommands from. Every module is declared here and listed once
//! in `MODULES`.
//!
//! ## Adding a subcommand
//!
//! 1. Create `commands/<name>.rs` with an argument struct and a type
//!    implementing `core::subcommand::Subcommand`.
//! 2. Export a static instance of it (`pub static COMMAND: ...`).
//! 3. Add `ModuleEntry::command("<name>", &<name>::COMMAND)` to `MODULES`.
//!
//! Helper modules that should not become commands are listed with
//! `ModuleEntry::support`.
//!
use crate::core::registry::{ModuleEntry, Namespace};

/// `kyntool echo`: prints its arguments.
pub mod echo;
/// `kyntool greet`: prints a greeting, configurable through `[commands.greet]`.
pub mod greet;
/// Output helpers shared by the commands. Not a command itself.
pub mod shared;

static MODULES: &[ModuleEntry] = &[
    ModuleEntry::command("echo", &echo::COMMAND),
    ModuleEntry::command("greet", &greet::COMMAND),
    ModuleEntry::support("shared"),
];

/// The namespace scanned at startup.
pub fn namespace() -> Namespace {
    Namespace::new("commands", MODULES)
}
