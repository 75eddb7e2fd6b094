//! Application-level utilities for the Bookshop CLI.
//!
//! This module provides:
//! - Path resolution for config and database files
//! - The application context shared by every command

mod context;
mod resolver;

// Re-export public API
pub use context::{fallback_ui_context, AppContext};
