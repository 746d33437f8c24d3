//! # kyntool CLI Greet Integration Tests
//!
//! File: cli/tests/greet.rs
//!
//! Integration tests for `kyntool greet`, including settings taken from a
//! configuration file.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_greet_default() {
    kyntool_cmd()
        .arg("greet")
        .assert()
        .success()
        .stdout("Hello, world!\n");
}

#[test]
fn test_greet_with_flags() {
    kyntool_cmd()
        .args(["greet", "--name", "Ada", "--count", "2", "--shout"])
        .assert()
        .success()
        .stdout("HELLO, ADA!\nHELLO, ADA!\n");
}

#[test]
fn test_greet_rejects_zero_count() {
    kyntool_cmd()
        .args(["greet", "--count", "0"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

/// Global flags are accepted after the command name.
#[test]
fn test_greet_with_trailing_global_flag() {
    kyntool_cmd()
        .args(["greet", "-v", "--name", "Ada"])
        .assert()
        .success()
        .stdout("Hello, Ada!\n")
        .stderr(predicate::str::contains("Dispatching to subcommand 'greet'"));
}

#[test]
fn test_greet_uses_config_settings() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_config(
        dir.path(),
        "kyntool.toml",
        "[commands.greet]\nname = \"team\"\n",
    );

    kyntool_cmd()
        .args(["--config", &path, "greet"])
        .assert()
        .success()
        .stdout("Hello, team!\n");
}

#[test]
fn test_greet_config_from_env() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_config(
        dir.path(),
        "kyntool.toml",
        "[commands.greet]\nname = \"env\"\nshout = true\n",
    );

    kyntool_cmd()
        .env("KYNTOOL_CONFIG", &path)
        .arg("greet")
        .assert()
        .success()
        .stdout("HELLO, ENV!\n");
}

#[test]
fn test_greet_project_config_discovered_from_cwd() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_config(
        dir.path(),
        ".kyntool.toml",
        "[commands.greet]\nname = \"project\"\n",
    );
    let nested = dir.path().join("sub");
    std::fs::create_dir_all(&nested).expect("Failed to create nested dir");

    kyntool_cmd()
        .current_dir(&nested)
        .arg("greet")
        .assert()
        .success()
        .stdout("Hello, project!\n");
}

#[test]
fn test_greet_invalid_settings_fail() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_config(
        dir.path(),
        "kyntool.toml",
        "[commands.greet]\nname = 42\n",
    );

    kyntool_cmd()
        .args(["--config", &path, "greet"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid settings for subcommand 'greet'"));
}

#[test]
fn test_greet_no_shout_overrides_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_config(
        dir.path(),
        "kyntool.toml",
        "[commands.greet]\nname = \"team\"\nshout = true\n",
    );

    kyntool_cmd()
        .args(["--config", &path, "greet", "--no-shout"])
        .assert()
        .success()
        .stdout("Hello, team!\n");
}
