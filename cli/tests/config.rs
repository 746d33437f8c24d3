//! # kyntool CLI Configuration Integration Tests
//!
//! File: cli/tests/config.rs
//!
//! ## Overview
//!
//! Verifies how configuration problems surface: for a command they are fatal,
//! reported on stderr, and exit with status 1 before the command runs. Bare
//! `kyntool` never reads configuration.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_missing_config_file_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("absent.toml");

    kyntool_cmd()
        .args(["--config", &missing.to_string_lossy(), "echo", "hi"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read configuration file"));
}

#[test]
fn test_unknown_config_key_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_config(dir.path(), "kyntool.toml", "[plugins]\npath = \"x\"\n");

    kyntool_cmd()
        .args(["--config", &path, "echo", "hi"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse TOML"));
}

#[test]
fn test_invalid_log_level_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_config(dir.path(), "kyntool.toml", "[logging]\nlevel = \"loud\"\n");

    kyntool_cmd()
        .args(["--config", &path, "echo", "hi"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown log level 'loud'"));
}

#[test]
fn test_configured_log_level_applies() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_config(dir.path(), "kyntool.toml", "[logging]\nlevel = \"info\"\n");

    kyntool_cmd()
        .args(["--config", &path, "echo", "hi"])
        .assert()
        .success()
        .stdout("hi\n")
        .stderr(predicate::str::contains("Dispatching to subcommand 'echo'"));
}

#[test]
fn test_unknown_command_section_warns() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_config(dir.path(), "kyntool.toml", "[commands.route]\nlayers = 4\n");

    kyntool_cmd()
        .args(["--config", &path, "echo", "hi"])
        .assert()
        .success()
        .stdout("hi\n")
        .stderr(predicate::str::contains("[commands.route]"));
}

/// Bare `kyntool` only shows help and never reads configuration.
#[test]
fn test_broken_project_config_does_not_block_help() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_config(dir.path(), ".kyntool.toml", "not = [valid\n");

    kyntool_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Usage:")
                .and(predicate::str::contains("Xpedition / KYN netlist tools")),
        );

    kyntool_cmd()
        .current_dir(dir.path())
        .args(["echo", "hi"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse TOML"));
}

/// The user configuration is located through `XDG_CONFIG_HOME`, which
/// `kyntool_cmd` points at an empty place.
#[cfg(target_os = "linux")]
#[test]
fn test_user_config_follows_xdg_config_home() {
    let home = tempdir().expect("Failed to create temp dir");
    let user_dir = home.path().join(".config").join("kyntool");
    std::fs::create_dir_all(&user_dir).expect("Failed to create user config dir");
    write_config(&user_dir, "config.toml", "[commands.greet]\nname = \"home\"\n");

    kyntool_cmd()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .arg("greet")
        .assert()
        .success()
        .stdout("Hello, home!\n");

    kyntool_cmd()
        .arg("greet")
        .assert()
        .success()
        .stdout("Hello, world!\n");
}
