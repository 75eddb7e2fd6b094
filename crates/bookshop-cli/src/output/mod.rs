//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying books
//! as JSON, grids, or plain lines.

mod json;
mod text;

// Re-export public API
pub use json::search_json;
pub use text::print_books;
