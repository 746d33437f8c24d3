//! # kyntool Logging Setup
//!
//! File: cli/src/core/logging.rs
//!
//! Log output goes to stderr so it never mixes with subcommand output on stdout.
//! The effective filter is chosen in this order:
//! 1. `RUST_LOG`, if set;
//! 2. `-q` (errors only) or the `-v` count (`-v` info, `-vv` debug, `-vvv` trace);
//! 3. `logging.level` from the configuration;
//! 4. `warn`.
//!
use tracing_subscriber::{fmt, EnvFilter};

/// Picks the log level from the command-line flags, falling back to the
/// configured level and then to `warn`.
pub fn level_for<'a>(verbose: u8, quiet: bool, configured: Option<&'a str>) -> &'a str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => configured.unwrap_or("warn"),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global tracing subscriber. Call once, after argument parsing.
pub fn init(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity_counts() {
        assert_eq!(level_for(0, false, None), "warn");
        assert_eq!(level_for(1, false, None), "info");
        assert_eq!(level_for(2, false, None), "debug");
        assert_eq!(level_for(3, false, None), "trace");
        assert_eq!(level_for(7, false, None), "trace");
    }

    #[test]
    fn test_level_for_quiet_wins() {
        assert_eq!(level_for(2, true, Some("debug")), "error");
    }

    #[test]
    fn test_level_for_configured_only_without_flags() {
        assert_eq!(level_for(0, false, Some("debug")), "debug");
        assert_eq!(level_for(1, false, Some("trace")), "info");
    }
}
