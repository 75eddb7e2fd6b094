//! Storage abstraction for Bookshop.
//!
//! This module defines the `StorageEngine` trait and the core types for
//! reading and writing book records.
//!
//! ## Architecture
//!
//! - `SqliteStorage`: a file-backed SQLite store that opens one connection
//!   per operation and drops it before returning
//!
//! The store is an explicit handle bound to a path. Nothing in this crate
//! opens a database on load; callers run `ensure_schema` once at startup.

pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use sqlite::SqliteStorage;
pub use traits::StorageEngine;
pub use types::{Book, BookField, BookId, BookSelection, NewBook};
