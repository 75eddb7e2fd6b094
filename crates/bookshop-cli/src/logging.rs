//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never mix with table or JSON output on stdout.
//! The filter comes from `BOOKSHOP_LOG`, then `RUST_LOG`, then the `-v` count.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Default filter directive for a given `-v` count.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
