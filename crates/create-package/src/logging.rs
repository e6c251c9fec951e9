//! Diagnostic logging for the CLI.
//!
//! Logs go to stderr; stdout carries only the user-facing report. The filter
//! is built from `-v` alone, no environment variable is read.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Map the `-v` count to a level for this tool's crates.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let level = level_for(verbosity);
    let filter = EnvFilter::new(format!("create_package={level},pkg_scaffold={level}"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for(0), "error");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(7), "trace");
    }
}
