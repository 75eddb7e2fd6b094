//! Text and table output for books.

use bookshop_core::Book;

use crate::ui::{book_grid, book_lines, OutputMode, UiContext};

use super::json::books_json;

/// Print books in the context's output mode.
///
/// Pretty mode draws a grid, plain mode prints tab-separated lines, JSON
/// mode prints an array.
pub fn print_books(ctx: &UiContext, books: &[Book]) -> anyhow::Result<()> {
    match ctx.mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&books_json(books))?);
        }
        OutputMode::Pretty => println!("{}", book_grid(ctx, books)),
        OutputMode::Plain => {
            if !books.is_empty() {
                println!("{}", book_lines(books));
            }
        }
    }
    Ok(())
}
