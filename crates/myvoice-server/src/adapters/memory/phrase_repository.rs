//! In-memory implementation of PhraseRepository

use async_trait::async_trait;
use tokio::sync::Mutex;

use myvoice::{DomainError, Phrase, PhraseBook, PhraseRepository, UsageSnapshot};

/// PhraseRepository backed by a single locked PhraseBook
///
/// One mutex guards both the Mine list and the usage counters, so a save
/// never observes a half-applied usage update.
#[derive(Default)]
pub struct InMemoryPhraseRepository {
    book: Mutex<PhraseBook>,
}

impl InMemoryPhraseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PhraseRepository for InMemoryPhraseRepository {
    async fn save(&self, text: &str) -> Result<Phrase, DomainError> {
        self.book.lock().await.save(text)
    }

    async fn auto_save(&self, text: &str) -> Result<Phrase, DomainError> {
        self.book.lock().await.auto_save(text)
    }

    async fn remove(&self, text: &str) -> Result<usize, DomainError> {
        Ok(self.book.lock().await.remove(text))
    }

    async fn list_saved(&self) -> Result<Vec<Phrase>, DomainError> {
        Ok(self.book.lock().await.saved().to_vec())
    }

    async fn record_usage(&self, text: &str) -> Result<u64, DomainError> {
        Ok(self.book.lock().await.record_usage(text))
    }

    async fn usage(&self) -> Result<UsageSnapshot, DomainError> {
        Ok(self.book.lock().await.usage())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_concurrent_usage_is_not_lost() {
        let repo = Arc::new(InMemoryPhraseRepository::new());

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.record_usage("Hello").await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.usage().await.unwrap().get("Hello"), Some(&50));
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_saves_keep_one() {
        let repo = Arc::new(InMemoryPhraseRepository::new());

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.save("I'm hungry").await.is_ok() })
            })
            .collect();
        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 1);
        assert_eq!(repo.list_saved().await.unwrap().len(), 1);
    }
}
