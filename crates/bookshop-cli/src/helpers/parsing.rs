//! Parsing helpers for interactive answers.

use bookshop_core::{BookField, BookId};

/// Parse an integer answer, ignoring surrounding whitespace.
pub fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Parse a book ID answer.
pub fn parse_book_id(value: &str) -> Option<BookId> {
    value.parse().ok()
}

/// Parse the "1. Title / 2. Author" answer. The field name works too.
pub fn parse_field_choice(value: &str) -> Option<BookField> {
    match value.trim() {
        "1" => Some(BookField::Title),
        "2" => Some(BookField::Author),
        other => other.parse().ok(),
    }
}

/// Whether a confirmation answer means yes. Only `y` (any case) counts.
pub fn parse_yes(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("y")
}
