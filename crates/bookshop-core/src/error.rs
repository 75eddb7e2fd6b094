//! Error types for Bookshop core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages.

use thiserror::Error;

use crate::storage::BookId;

/// Result type alias for Bookshop operations.
pub type Result<T> = std::result::Result<T, BookshopError>;

/// Core error type for Bookshop operations.
#[derive(Debug, Error)]
pub enum BookshopError {
    /// Storage backend error (unreachable file, malformed statement, I/O)
    #[error("Storage error: {0}")]
    Storage(String),

    /// No book with the given ID
    #[error("Book not found: {0}")]
    NotFound(BookId),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl BookshopError {
    /// Whether this error means the addressed book does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BookshopError::NotFound(_))
    }
}

impl From<rusqlite::Error> for BookshopError {
    fn from(err: rusqlite::Error) -> Self {
        BookshopError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for BookshopError {
    fn from(err: std::io::Error) -> Self {
        BookshopError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = BookshopError::NotFound(BookId::new(42));
        assert_eq!(err.to_string(), "Book not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_rusqlite_error_maps_to_storage() {
        let err: BookshopError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, BookshopError::Storage(_)));
        assert!(!err.is_not_found());
    }
}
