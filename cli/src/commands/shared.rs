//! # Shared Output Helpers
//!
//! File: cli/src/commands/shared.rs
//!
//! Helpers used by several subcommands. This module sits in the `commands`
//! namespace but provides no parser fragment, so discovery skips it.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::io::Write;

/// Upper-cases `text` when `upper` is set.
pub fn apply_case(text: &str, upper: bool) -> String {
    if upper {
        text.to_uppercase()
    } else {
        text.to_string()
    }
}

/// Writes `text` to `out`, followed by a newline when `newline` is set.
pub fn write_text(out: &mut impl Write, text: &str, newline: bool) -> Result<()> {
    out.write_all(text.as_bytes())
        .context("Failed to write command output")?;
    if newline {
        out.write_all(b"\n")
            .context("Failed to write command output")?;
    }
    out.flush().context("Failed to flush command output")?;
    Ok(())
}
