//! Core data types for the storage layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BookshopError;

/// Identifier of a book record.
///
/// Assigned by the store on insert. IDs increase monotonically and are never
/// reused after a deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = BookshopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| BookshopError::InvalidInput(format!("Invalid book ID: {}", s.trim())))
    }
}

/// A stored book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, assigned by the store
    pub id: BookId,

    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Copies in stock (expected non-negative, not enforced)
    pub quantity: i64,
}

impl Book {
    /// The record as an ordered (id, title, author, quantity) tuple.
    pub fn as_row(&self) -> (BookId, &str, &str, i64) {
        (self.id, &self.title, &self.author, self.quantity)
    }

    /// Text the fuzzy matcher compares queries against.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.author)
    }
}

/// Builder for creating new books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub quantity: i64,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, quantity: i64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }
}

/// A text field of a book that can be edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookField {
    Title,
    Author,
}

impl BookField {
    /// Column name in the `book` table.
    pub fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for BookField {
    type Err = BookshopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            other => Err(BookshopError::InvalidInput(format!(
                "Unknown field '{}' (expected 'title' or 'author')",
                other
            ))),
        }
    }
}

/// Which records a fetch returns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BookSelection {
    /// Every stored record
    #[default]
    All,

    /// The record with this ID, if any
    One(BookId),

    /// Every record whose ID is in the list
    Many(Vec<BookId>),
}

impl BookSelection {
    /// Build a selection from an ID list.
    ///
    /// An empty list selects every record and a single ID selects one.
    pub fn from_ids(ids: Vec<BookId>) -> Self {
        match ids.len() {
            0 => Self::All,
            1 => Self::One(ids[0]),
            _ => Self::Many(ids),
        }
    }
}

impl From<BookId> for BookSelection {
    fn from(id: BookId) -> Self {
        Self::One(id)
    }
}

impl From<Vec<BookId>> for BookSelection {
    fn from(ids: Vec<BookId>) -> Self {
        Self::from_ids(ids)
    }
}
