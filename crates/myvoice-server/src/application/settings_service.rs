//! Settings Application Service (Use Case)
//!
//! Reads and replaces the settings record of a session.

use std::sync::Arc;

use myvoice::{DomainError, SessionId, SettingsRepository, Theme, UserSettings};

/// Application service for session settings
pub struct SettingsService<R: SettingsRepository> {
    repo: Arc<R>,
}

impl<R: SettingsRepository> SettingsService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Current settings for a session, defaults when nothing was stored
    pub async fn get(&self, session: SessionId) -> Result<UserSettings, DomainError> {
        Ok(self.repo.find(session).await?.unwrap_or_default())
    }

    /// Overwrite all fields, using defaults for any that are missing
    pub async fn update(
        &self,
        session: SessionId,
        user_name: Option<String>,
        theme: Option<Theme>,
        voice: Option<String>,
    ) -> Result<UserSettings, DomainError> {
        let settings = UserSettings::from_parts(user_name, theme, voice);
        let saved = self.repo.save(session, settings).await?;

        tracing::info!(
            "Updated settings for session {}: theme={}, voice={}",
            session,
            saved.theme,
            saved.voice
        );

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySettingsRepository;

    #[tokio::test]
    async fn test_update_replaces_every_field() {
        let service = SettingsService::new(Arc::new(InMemorySettingsRepository::new()));
        let session = SessionId::generate();

        service
            .update(
                session,
                Some("Kevan".into()),
                Some(Theme::Gamer),
                Some("rachel".into()),
            )
            .await
            .unwrap();
        let settings = service.update(session, None, None, None).await.unwrap();

        assert_eq!(settings, UserSettings::default());
        assert_eq!(service.get(session).await.unwrap(), UserSettings::default());
    }

    #[tokio::test]
    async fn test_unknown_session_gets_defaults() {
        let service = SettingsService::new(Arc::new(InMemorySettingsRepository::new()));
        let settings = service.get(SessionId::generate()).await.unwrap();
        assert_eq!(settings, UserSettings::default());
    }
}
