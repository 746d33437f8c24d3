//! # kyntool Subcommand Registry
//!
//! File: cli/src/core/registry.rs
//!
//! ## Overview
//!
//! This module implements subcommand discovery. A `Namespace` is an explicit,
//! static table of modules; `discover` walks it once at startup and produces
//! a `Registry` mapping each subcommand name to its parser fragment and its
//! handler.
//!
//! ## Architecture
//!
//! - `ModuleEntry`: one module of a namespace. Modules that implement
//!   `Subcommand` are listed with `ModuleEntry::command`; helper modules that
//!   live in the same namespace without a parser fragment are listed with
//!   `ModuleEntry::support` and are skipped by discovery.
//! - `Namespace`: a named slice of module entries, passed explicitly to
//!   `discover` instead of being looked up from process state.
//! - `SubcommandEntry`: the registered name, the built fragment and the handler.
//! - `Registry`: the ordered entries. Order follows the namespace table and is
//!   the order commands appear in `--help`.
//!
//! Discovery fails (and the binary exits at startup) when a provider has an
//! unusable name or when two providers share a name.
//!
use crate::core::error::{CliError, Result};
use crate::core::subcommand::Subcommand;
use clap::Command;
use tracing::{debug, info, warn};

/// One module listed in a namespace.
#[derive(Clone, Copy)]
pub struct ModuleEntry {
    name: &'static str,
    provider: Option<&'static dyn Subcommand>,
}

impl ModuleEntry {
    /// A module that provides a subcommand.
    pub const fn command(name: &'static str, provider: &'static dyn Subcommand) -> Self {
        Self {
            name,
            provider: Some(provider),
        }
    }

    /// A module without a parser fragment. Discovery skips it.
    pub const fn support(name: &'static str) -> Self {
        Self {
            name,
            provider: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn provider(&self) -> Option<&'static dyn Subcommand> {
        self.provider
    }
}

impl std::fmt::Debug for ModuleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleEntry")
            .field("name", &self.name)
            .field("provides_subcommand", &self.provider.is_some())
            .finish()
    }
}

/// A named table of modules to discover subcommands from.
#[derive(Debug, Clone, Copy)]
pub struct Namespace {
    name: &'static str,
    modules: &'static [ModuleEntry],
}

impl Namespace {
    pub const fn new(name: &'static str, modules: &'static [ModuleEntry]) -> Self {
        Self { name, modules }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn modules(&self) -> &'static [ModuleEntry] {
        self.modules
    }
}

/// A discovered subcommand. Immutable once registered.
#[derive(Clone)]
pub struct SubcommandEntry {
    name: &'static str,
    fragment: Command,
    handler: &'static dyn Subcommand,
}

impl SubcommandEntry {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The parser fragment, already renamed to `name`.
    pub fn fragment(&self) -> &Command {
        &self.fragment
    }

    pub fn handler(&self) -> &'static dyn Subcommand {
        self.handler
    }
}

impl std::fmt::Debug for SubcommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubcommandEntry")
            .field("name", &self.name)
            .field("fragment", &self.fragment)
            .finish_non_exhaustive()
    }
}

/// Subcommands by name, in namespace order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<SubcommandEntry>,
}

impl Registry {
    /// Finds a subcommand by its registered name.
    pub fn get(&self, name: &str) -> Option<&SubcommandEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubcommandEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// # Discover Subcommands (`discover`)
///
/// Walks every module of `namespace` in table order. Each module that provides
/// a `Subcommand` has its fragment built and is registered under the module's
/// name; support modules are skipped.
///
/// Discovery runs before logging is set up, so it does not log. Callers
/// report the result with `log_summary` once a subscriber is installed.
///
/// ## Arguments
///
/// * `namespace`: The module table to scan.
///
/// ## Returns
///
/// * `Ok(Registry)` with one entry per providing module.
/// * `Err(CliError::InvalidSubcommandName)` if a provider's name is empty,
///   contains whitespace or starts with `-`.
/// * `Err(CliError::DuplicateSubcommand)` if two providers share a name.
pub fn discover(namespace: &Namespace) -> Result<Registry> {
    let mut registry = Registry::default();
    for module in namespace.modules() {
        let Some(provider) = module.provider() else {
            continue;
        };

        let name = module.name();
        if !is_valid_name(name) {
            return Err(CliError::InvalidSubcommandName {
                name: name.to_string(),
                namespace: namespace.name().to_string(),
            }
            .into());
        }
        if registry.get(name).is_some() {
            return Err(CliError::DuplicateSubcommand {
                name: name.to_string(),
                namespace: namespace.name().to_string(),
            }
            .into());
        }

        registry.entries.push(SubcommandEntry {
            name,
            fragment: provider.fragment().name(name),
            handler: provider,
        });
    }
    Ok(registry)
}

/// Logs what `discover` found in `namespace`: the registered commands at
/// info level, skipped support modules at debug level.
pub fn log_summary(namespace: &Namespace, registry: &Registry) {
    if registry.is_empty() {
        warn!(
            "No subcommands registered in namespace '{}'.",
            namespace.name()
        );
    } else {
        info!(
            "Discovered {} subcommand(s) in namespace '{}': {}",
            registry.len(),
            namespace.name(),
            registry.names().collect::<Vec<_>>().join(", ")
        );
    }
    for module in namespace.modules().iter().filter(|m| m.provider().is_none()) {
        debug!(
            "Module '{}' provides no parser fragment, skipped.",
            module.name()
        );
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('-') && !name.chars().any(char::is_whitespace)
}
