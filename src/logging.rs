//! Log initialization for the command-line front end.
//!
//! Library code only emits `tracing` events under the `lox::scanner` target;
//! installing a subscriber is left to the binary.

use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset: `default` for everything.
pub fn filter_for(default: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default.as_str().to_ascii_lowercase()))
}

/// Install a compact stderr subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(default: Level) {
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_target(true)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .with_env_filter(filter_for(default))
        .try_init();
}
