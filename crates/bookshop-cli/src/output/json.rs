//! JSON output formatting for books.

use bookshop_core::{Book, BookMatch};

/// Convert books to a JSON array for output.
pub fn books_json(books: &[Book]) -> serde_json::Value {
    serde_json::json!(books)
}

/// Convert search results to JSON, pairing each match with its book and score.
///
/// Matches keep their best-first order.
pub fn search_json(query: &str, matches: &[BookMatch], books: &[Book]) -> serde_json::Value {
    let results: Vec<serde_json::Value> = matches
        .iter()
        .filter_map(|m| {
            books.iter().find(|book| book.id == m.id).map(|book| {
                serde_json::json!({
                    "id": book.id,
                    "title": book.title,
                    "author": book.author,
                    "quantity": book.quantity,
                    "score": m.score,
                })
            })
        })
        .collect();

    serde_json::json!({
        "query": query,
        "count": results.len(),
        "results": results,
    })
}
