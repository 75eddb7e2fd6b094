//! Fuzzy search over book records.
//!
//! `FuzzyMatcher` scores a free-text query against each book's title and
//! author and keeps the books scoring at or above a threshold, best first.

pub mod score;

use serde::Serialize;
use tracing::debug;

use crate::storage::{Book, BookId};

/// Minimum score a book needs to count as a match.
pub const DEFAULT_THRESHOLD: u8 = 80;

/// A book that matched a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookMatch {
    pub id: BookId,
    pub score: u8,
}

/// Fuzzy matcher configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatcher {
    /// Minimum score (0-100) for a match
    pub threshold: u8,

    /// Maximum number of matches returned; `None` returns every match
    pub limit: Option<usize>,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: None,
        }
    }
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold.min(100);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Score one book against a query.
    pub fn score(&self, query: &str, book: &Book) -> u8 {
        score::weighted_ratio(query, &book.search_text())
    }

    /// Match a query against candidate books.
    ///
    /// Returns matches ordered by descending score. Books with equal scores
    /// keep their candidate order. An empty query matches nothing.
    pub fn find(&self, query: &str, books: &[Book]) -> Vec<BookMatch> {
        if score::normalize(query).is_empty() {
            debug!("empty query, no matches");
            return Vec::new();
        }

        let mut matches: Vec<BookMatch> = books
            .iter()
            .map(|book| BookMatch {
                id: book.id,
                score: self.score(query, book),
            })
            .filter(|m| m.score >= self.threshold)
            .collect();

        // Stable sort keeps candidate order among ties.
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        if let Some(limit) = self.limit {
            matches.truncate(limit);
        }

        debug!(
            query,
            candidates = books.len(),
            matches = matches.len(),
            "fuzzy search done"
        );
        matches
    }

    /// IDs of the books matching a query, best first.
    pub fn find_ids(&self, query: &str, books: &[Book]) -> Vec<BookId> {
        self.find(query, books).into_iter().map(|m| m.id).collect()
    }
}
