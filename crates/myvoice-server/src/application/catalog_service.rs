//! Catalog Application Service
//!
//! Read-only access to the built-in boards and word list.

use std::sync::Arc;

use myvoice::{DefaultBoards, WordList};

/// Application service for boards and word suggestions
pub struct CatalogService {
    boards: Arc<DefaultBoards>,
    words: WordList,
}

impl CatalogService {
    pub fn new(boards: Arc<DefaultBoards>, words: WordList) -> Self {
        Self { boards, words }
    }

    pub fn boards(&self) -> &DefaultBoards {
        &self.boards
    }

    /// Word suggestions for an optional query (absent behaves like empty)
    pub fn suggest(&self, query: Option<&str>) -> Vec<String> {
        let query = query.unwrap_or_default();
        let words = self.words.suggest(query);
        tracing::debug!("Suggested {} words for {:?}", words.len(), query);
        words
    }
}
