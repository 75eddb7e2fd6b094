//! CLI error types for structured error handling.
//!
//! This module maps failures to specific exit codes, so scripts driving the
//! one-shot commands can tell a missing book from a broken database.

use std::fmt;

use bookshop_core::BookshopError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (book, explicit config file)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<BookshopError>() {
        Some(BookshopError::NotFound(_)) => exit_codes::NOT_FOUND,
        _ => exit_codes::FAILURE,
    }
}

/// Hint shown under an error message, if one applies.
pub fn hint_for(err: &anyhow::Error) -> Option<String> {
    let message = err.to_string();
    if let Some(idx) = message.find("\nHint:") {
        return Some(message[idx + 1..].to_string());
    }

    match err.downcast_ref::<BookshopError>() {
        Some(BookshopError::NotFound(_)) => {
            Some("Hint: Run `bookshop list` to see book IDs.".to_string())
        }
        Some(BookshopError::Storage(_)) => Some(
            "Hint: Check that the database path is writable, or pass --db <PATH>.".to_string(),
        ),
        _ => None,
    }
}
