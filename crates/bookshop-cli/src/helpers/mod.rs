//! Input helpers for the CLI.
//!
//! This module provides:
//! - Line prompting with reprompt-on-bad-input (`input`)
//! - Parsing of menu answers (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::{confirm_delete, Prompter};
pub use parsing::{parse_book_id, parse_field_choice, parse_yes};
