//! # kyntool CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`main_tests.rs`,
//! `greet.rs`, `echo.rs`, `config.rs`). Each of those files is compiled as a
//! separate test crate that runs the built `kyntool` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get kyntool Command (`kyntool_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `kyntool` binary with an
/// environment that does not depend on the machine running the tests:
/// `RUST_LOG` and `KYNTOOL_CONFIG` are removed, and both `HOME` and
/// `XDG_CONFIG_HOME` point at an empty location, so the user configuration
/// directory holds no configuration on Linux and macOS alike.
///
/// ## Panics
/// Panics if the `kyntool` binary cannot be found via `Command::cargo_bin`.
pub fn kyntool_cmd() -> Command {
    let mut cmd = Command::cargo_bin("kyntool").expect("Failed to find kyntool binary for testing");
    let empty_home = std::env::temp_dir().join("kyntool-tests-no-user-config");
    cmd.env_remove("RUST_LOG")
        .env_remove("KYNTOOL_CONFIG")
        .env("HOME", &empty_home)
        .env("XDG_CONFIG_HOME", &empty_home);
    cmd
}

/// Writes `content` to `dir/name` and returns the path as a string.
pub fn write_config(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test config");
    path.to_string_lossy().into_owned()
}
