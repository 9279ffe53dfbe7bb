//! Phrase Repository Port
//!
//! Abstract interface for the Mine list and usage counters.
//! Both collections are owned by one store so every call is atomic.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Phrase, UsageSnapshot};

/// Repository interface for saved phrases and usage counts
#[async_trait]
pub trait PhraseRepository: Send + Sync {
    /// Save a phrase into Mine (trimmed, rejects empty and duplicate text)
    async fn save(&self, text: &str) -> Result<Phrase, DomainError>;

    /// Promote a phrase into Mine, flagged as auto-saved
    async fn auto_save(&self, text: &str) -> Result<Phrase, DomainError>;

    /// Remove all saved entries matching the trimmed text
    async fn remove(&self, text: &str) -> Result<usize, DomainError>;

    /// User-saved phrases in save order
    async fn list_saved(&self) -> Result<Vec<Phrase>, DomainError>;

    /// Count one use of a phrase, returning the new total
    async fn record_usage(&self, text: &str) -> Result<u64, DomainError>;

    /// Snapshot of all usage counts
    async fn usage(&self) -> Result<UsageSnapshot, DomainError>;
}
