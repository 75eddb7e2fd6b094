//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table as ComfyTable};

use bookshop_core::Book;

use super::context::UiContext;
use super::format::{cell_text, single_line};
use super::theme::{styled, Badge};

/// Column headers for book tables.
pub const BOOK_HEADERS: [&str; 4] = ["ID", "Title", "Author", "Quantity"];

/// Longest title or author shown in a table cell.
const MAX_CELL: usize = 60;

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render books as a bordered grid with ID/Title/Author/Quantity headers.
///
/// Always draws the grid, whatever the output mode. Unicode borders unless
/// the context is ASCII-only.
pub fn book_grid(ctx: &UiContext, books: &[Book]) -> String {
    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_FULL);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(BOOK_HEADERS);

    for book in books {
        table.add_row(vec![
            Cell::new(book.id).set_alignment(CellAlignment::Right),
            Cell::new(cell_text(&book.title, MAX_CELL)),
            Cell::new(cell_text(&book.author, MAX_CELL)),
            Cell::new(book.quantity).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

/// Render books as tab-separated lines (no header), for scripts.
pub fn book_lines(books: &[Book]) -> String {
    books
        .iter()
        .map(|book| {
            format!(
                "{}\t{}\t{}\t{}",
                book.id,
                single_line(&book.title),
                single_line(&book.author),
                book.quantity
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(h.to_string());
        }
    } else {
        lines.push(format!("error={}", single_line(message)));
        if let Some(h) = error_hint {
            lines.push(format!(
                "hint={}",
                h.trim_start_matches("Hint:").trim_start()
            ));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use bookshop_core::BookId;

    fn books() -> Vec<Book> {
        vec![
            Book {
                id: BookId::new(1),
                title: "The Hobbit".to_string(),
                author: "J.R.R. Tolkien".to_string(),
                quantity: 3,
            },
            Book {
                id: BookId::new(2),
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                quantity: 5,
            },
        ]
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_grid_has_headers_and_rows() {
        let grid = book_grid(&UiContext::plain(), &books());
        for header in BOOK_HEADERS {
            assert!(grid.contains(header));
        }
        assert!(grid.contains("The Hobbit"));
        assert!(grid.contains("Frank Herbert"));
        assert!(grid.contains('+'));
    }

    #[test]
    fn test_grid_for_empty_list_still_has_headers() {
        let grid = book_grid(&pretty_ctx(), &[]);
        assert!(grid.contains("Quantity"));
    }

    #[test]
    fn test_book_lines() {
        assert_eq!(
            book_lines(&books()),
            "1\tThe Hobbit\tJ.R.R. Tolkien\t3\n2\tDune\tFrank Herbert\t5"
        );
    }

    #[test]
    fn test_badge_plain() {
        assert_eq!(badge(&UiContext::plain(), Badge::Ok, "Added"), "[OK] Added");
    }

    #[test]
    fn test_error_message_modes() {
        let plain = error_message(
            &UiContext::plain(),
            "Book not found: 4",
            Some("Hint: Run `bookshop list` to see book IDs."),
        );
        assert_eq!(
            plain,
            "error=Book not found: 4\nhint=Run `bookshop list` to see book IDs."
        );

        let pretty = error_message(&pretty_ctx(), "Book not found: 4", None);
        assert_eq!(pretty, "[\u{2717}] Book not found: 4");
    }
}
