//! File-backed SQLite storage backend.
//!
//! `SqliteStorage` is a handle bound to a database path. It holds no open
//! connection: every operation opens its own connection, runs a single
//! autocommitted statement, and drops the connection before returning, on
//! success and error paths alike.

mod row;

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, params_from_iter, Connection};
use tracing::{debug, info, warn};

use crate::error::{BookshopError, Result};
use crate::storage::traits::StorageEngine;
use crate::storage::types::{Book, BookField, BookId, BookSelection, NewBook};

use row::{BookRow, BOOK_COLUMNS};

/// Default database file name, relative to the working directory.
pub const DEFAULT_DATABASE_FILE: &str = "bookshop_database";

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS book(\
    id INTEGER PRIMARY KEY AUTOINCREMENT, \
    title TEXT, \
    author TEXT, \
    Quantity INTEGER)";

/// SQLite storage engine.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    path: PathBuf,
}

impl SqliteStorage {
    /// Create a handle for the database at `path`.
    ///
    /// Nothing is opened or created until an operation runs.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Open a connection scoped to a single operation.
    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.path).map_err(|e| {
            BookshopError::Storage(format!(
                "Failed to open database {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn query_books(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Book>> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, BookRow::from_row)?;

        let mut books = Vec::new();
        for row in rows {
            books.push(Book::from(row?));
        }
        Ok(books)
    }
}

impl StorageEngine for SqliteStorage {
    fn ensure_schema(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    BookshopError::Storage(format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let conn = self.connect()?;
        conn.execute_batch(SCHEMA)?;
        info!(path = %self.path.display(), "book schema ready");
        Ok(())
    }

    fn create(&self, book: &NewBook) -> Result<BookId> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO book (title, author, Quantity) VALUES (?1, ?2, ?3)",
            params![book.title, book.author, book.quantity],
        )?;
        let id = BookId::new(conn.last_insert_rowid());
        info!(%id, title = %book.title, "book created");
        Ok(id)
    }

    fn update_quantity(&self, id: BookId, quantity: i64) -> Result<()> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE book SET Quantity = ?1 WHERE id = ?2",
            params![quantity, id.get()],
        )?;
        if changed == 0 {
            warn!(%id, "quantity update matched no book");
            return Err(BookshopError::NotFound(id));
        }
        info!(%id, quantity, "book quantity updated");
        Ok(())
    }

    fn edit_field(&self, id: BookId, field: BookField, value: &str) -> Result<()> {
        // Column names cannot be bound, so each field gets its own statement.
        let sql = match field {
            BookField::Title => "UPDATE book SET title = ?1 WHERE id = ?2",
            BookField::Author => "UPDATE book SET author = ?1 WHERE id = ?2",
        };

        let conn = self.connect()?;
        let changed = conn.execute(sql, params![value, id.get()])?;
        if changed == 0 {
            warn!(%id, %field, "field edit matched no book");
            return Err(BookshopError::NotFound(id));
        }
        info!(%id, %field, "book field edited");
        Ok(())
    }

    fn delete(&self, id: BookId) -> Result<bool> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM book WHERE id = ?1", params![id.get()])?;
        if changed == 0 {
            debug!(%id, "delete matched no book");
        } else {
            info!(%id, "book deleted");
        }
        Ok(changed > 0)
    }

    fn fetch(&self, selection: &BookSelection) -> Result<Vec<Book>> {
        let conn = self.connect()?;

        let books = match selection {
            BookSelection::All => Self::query_books(
                &conn,
                &format!("SELECT {} FROM book ORDER BY id", BOOK_COLUMNS),
                [],
            )?,
            BookSelection::One(id) => Self::query_books(
                &conn,
                &format!("SELECT {} FROM book WHERE id = ?1", BOOK_COLUMNS),
                params![id.get()],
            )?,
            BookSelection::Many(ids) if ids.is_empty() => Vec::new(),
            BookSelection::Many(ids) => {
                let placeholders = vec!["?"; ids.len()].join(", ");
                Self::query_books(
                    &conn,
                    &format!(
                        "SELECT {} FROM book WHERE id IN ({}) ORDER BY id",
                        BOOK_COLUMNS, placeholders
                    ),
                    params_from_iter(ids.iter().map(|id| id.get())),
                )?
            }
        };

        debug!(?selection, count = books.len(), "books fetched");
        Ok(books)
    }

    fn count(&self) -> Result<usize> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM book", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| BookshopError::Storage(format!("Invalid book count: {}", count)))
    }
}
