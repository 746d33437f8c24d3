//! # kyntool Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the dispatcher machinery that every subcommand
//! relies on:
//! - `subcommand`: the `Subcommand` capability trait and the `Invocation`
//!   handed to handlers
//! - `registry`: namespaces of modules and subcommand discovery
//! - `dispatch`: composition of the top-level parser and routing
//! - `config`: configuration loading, merging and validation
//! - `logging`: tracing subscriber setup
//! - `error`: error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::error::Result;
//! use crate::core::subcommand::{Invocation, Subcommand};
//! ```
//!
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod registry;
pub mod subcommand;
