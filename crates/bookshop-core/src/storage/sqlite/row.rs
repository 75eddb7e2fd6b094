//! Book row type for database queries.

use tracing::warn;

use crate::storage::types::{Book, BookId};

/// Columns selected for every book query, in `BookRow` order.
pub const BOOK_COLUMNS: &str = "id, title, author, Quantity";

/// Raw row data from the `book` table, before parsing into domain types.
///
/// The table declares no NOT NULL constraints, so any column other than `id`
/// may hold NULL in files written by other tools.
#[derive(Debug)]
pub struct BookRow {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub quantity: Option<i64>,
}

impl BookRow {
    /// Read a row selected with `BOOK_COLUMNS`.
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
            quantity: row.get(3)?,
        })
    }
}

impl From<BookRow> for Book {
    /// NULL text reads as empty and a NULL quantity as 0.
    fn from(row: BookRow) -> Self {
        let quantity = row.quantity.unwrap_or_else(|| {
            warn!(id = row.id, "book has no quantity, reading it as 0");
            0
        });

        Book {
            id: BookId::new(row.id),
            title: row.title.unwrap_or_default(),
            author: row.author.unwrap_or_default(),
            quantity,
        }
    }
}
