//! Settings Repository Port
//!
//! Abstract interface for session-scoped settings records.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, SessionId, UserSettings};

/// Repository interface for UserSettings keyed by session
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Find the settings stored for a session
    async fn find(&self, session: SessionId) -> Result<Option<UserSettings>, DomainError>;

    /// Store settings for a session, replacing any previous record
    async fn save(
        &self,
        session: SessionId,
        settings: UserSettings,
    ) -> Result<UserSettings, DomainError>;
}
