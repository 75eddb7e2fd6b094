//! # Bookshop Core
//!
//! Core library for Bookshop - a small, single-user inventory manager for a
//! bookshop's stock of titles.
//!
//! This crate provides the persistence layer and the fuzzy search layer,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: Storage engine trait and the SQLite implementation
//! - **search**: Fuzzy matching of free-text queries against book records
//! - **error**: Error taxonomy shared by both layers

pub mod error;
pub mod search;
pub mod storage;

pub use error::{BookshopError, Result};
pub use search::{BookMatch, FuzzyMatcher};
pub use storage::{Book, BookField, BookId, BookSelection, NewBook, SqliteStorage, StorageEngine};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
