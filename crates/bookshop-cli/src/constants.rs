//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (storage failures, unreadable config)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Book not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Database file used when neither flags, env, nor config name one.
pub const DEFAULT_DB_FILE: &str = bookshop_core::storage::sqlite::DEFAULT_DATABASE_FILE;

/// Env var holding a tracing filter directive (takes precedence over `RUST_LOG`).
pub const LOG_ENV: &str = "BOOKSHOP_LOG";
