//! Storage engine trait definition.
//!
//! The `StorageEngine` trait defines the interface that storage backends
//! implement. The CLI and tests only talk to this trait, so a backend can be
//! swapped or pointed at a throwaway file without touching callers.

use super::types::{Book, BookField, BookId, BookSelection, NewBook};
use crate::error::Result;

/// Storage engine interface for the book inventory.
///
/// All implementations must ensure:
/// - Every statement binds user data as parameters
/// - Each mutating operation commits on its own
/// - IDs are never reused after deletion
pub trait StorageEngine: Send + Sync {
    /// Create the `book` table if it does not exist yet.
    ///
    /// Call once at startup before any other operation.
    fn ensure_schema(&self) -> Result<()>;

    /// Insert a new book.
    ///
    /// # Returns
    ///
    /// Returns the ID assigned by the store.
    fn create(&self, book: &NewBook) -> Result<BookId>;

    /// Overwrite the stock quantity of a book.
    ///
    /// # Errors
    ///
    /// Returns `BookshopError::NotFound` if no book has this ID.
    fn update_quantity(&self, id: BookId, quantity: i64) -> Result<()>;

    /// Overwrite the title or author of a book.
    ///
    /// # Errors
    ///
    /// Returns `BookshopError::NotFound` if no book has this ID.
    fn edit_field(&self, id: BookId, field: BookField, value: &str) -> Result<()>;

    /// Delete a book.
    ///
    /// Deleting a missing ID is a no-op.
    ///
    /// # Returns
    ///
    /// Returns `true` if a record was removed.
    fn delete(&self, id: BookId) -> Result<bool>;

    /// Fetch books by selection, ordered by ID.
    fn fetch(&self, selection: &BookSelection) -> Result<Vec<Book>>;

    /// Get a single book by ID.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(book))` if found, `Ok(None)` if not found.
    fn get(&self, id: BookId) -> Result<Option<Book>> {
        Ok(self.fetch(&BookSelection::One(id))?.into_iter().next())
    }

    /// Number of stored books.
    fn count(&self) -> Result<usize> {
        Ok(self.fetch(&BookSelection::All)?.len())
    }
}
