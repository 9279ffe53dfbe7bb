//! In-memory implementation of SettingsRepository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use myvoice::{DomainError, SessionId, SettingsRepository, UserSettings};

/// Settings records keyed by session id
#[derive(Default)]
pub struct InMemorySettingsRepository {
    sessions: RwLock<HashMap<SessionId, UserSettings>>,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn find(&self, session: SessionId) -> Result<Option<UserSettings>, DomainError> {
        Ok(self.sessions.read().await.get(&session).cloned())
    }

    async fn save(
        &self,
        session: SessionId,
        settings: UserSettings,
    ) -> Result<UserSettings, DomainError> {
        self.sessions
            .write()
            .await
            .insert(session, settings.clone());
        Ok(settings)
    }
}
