//! Phrase Application Service (Use Case)
//!
//! Orchestrates the Mine list and usage tracking.

use std::sync::Arc;

use myvoice::{DefaultBoards, DomainError, Phrase, PhraseRepository, UsageSnapshot};

/// Outcome of recording one use of a phrase
#[derive(Debug, Clone)]
pub struct UsageRecord {
    pub phrase: String,
    pub count: u64,
    /// Entry added to Mine because the count reached the auto-save threshold
    pub auto_saved: Option<Phrase>,
}

/// Application service for Mine phrases and usage
pub struct PhraseService<R: PhraseRepository> {
    repo: Arc<R>,
    boards: Arc<DefaultBoards>,
    auto_save_threshold: Option<u64>,
}

impl<R: PhraseRepository> PhraseService<R> {
    pub fn new(repo: Arc<R>, boards: Arc<DefaultBoards>) -> Self {
        Self {
            repo,
            boards,
            auto_save_threshold: None,
        }
    }

    /// Promote phrases into Mine once they have been used `threshold` times
    pub fn with_auto_save_threshold(mut self, threshold: Option<u64>) -> Self {
        self.auto_save_threshold = threshold;
        self
    }

    /// Save a phrase into Mine
    pub async fn save(&self, text: &str) -> Result<Phrase, DomainError> {
        match self.repo.save(text).await {
            Ok(phrase) => {
                tracing::info!("Saved phrase to Mine: {:?}", phrase.text);
                Ok(phrase)
            }
            Err(e) => {
                tracing::warn!("Rejected Mine save: {}", e);
                Err(e)
            }
        }
    }

    /// Remove a phrase from Mine; absent phrases are not an error
    pub async fn remove(&self, text: &str) -> Result<usize, DomainError> {
        let removed = self.repo.remove(text).await?;
        if removed > 0 {
            tracing::info!("Removed {} Mine entries for {:?}", removed, text.trim());
        } else {
            tracing::debug!("Nothing to remove for {:?}", text.trim());
        }
        Ok(removed)
    }

    /// Default Mine entries followed by user-saved ones in save order
    pub async fn list_mine(&self) -> Result<Vec<Phrase>, DomainError> {
        let saved = self.repo.list_saved().await?;
        let mut phrases = Vec::with_capacity(self.boards.mine().len() + saved.len());
        phrases.extend_from_slice(self.boards.mine());
        phrases.extend(saved);
        Ok(phrases)
    }

    /// Promote a phrase into Mine as auto-saved
    pub async fn auto_save(&self, text: &str) -> Result<Phrase, DomainError> {
        let phrase = self.repo.auto_save(text).await?;
        tracing::info!(
            "Auto-saved phrase to Mine: {:?} (used {} times)",
            phrase.text,
            phrase.usage_count.unwrap_or(0)
        );
        Ok(phrase)
    }

    /// Count one use of a phrase.
    ///
    /// When an auto-save threshold is configured and this use reaches it
    /// exactly, the phrase is promoted into Mine.
    pub async fn record_usage(&self, text: &str) -> Result<UsageRecord, DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::EmptyPhrase);
        }

        let count = self.repo.record_usage(text).await?;
        tracing::debug!("Recorded use {} of {:?}", count, text);

        let auto_saved = match self.auto_save_threshold {
            Some(threshold) if count == threshold => match self.auto_save(text).await {
                Ok(phrase) => Some(phrase),
                Err(e) if e.is_rejection() => {
                    tracing::debug!("Skipped auto-save: {}", e);
                    None
                }
                Err(e) => return Err(e),
            },
            _ => None,
        };

        Ok(UsageRecord {
            phrase: text.to_string(),
            count,
            auto_saved,
        })
    }

    /// Snapshot of all usage counts
    pub async fn usage(&self) -> Result<UsageSnapshot, DomainError> {
        self.repo.usage().await
    }
}
