//! Settings - Session display and voice preferences

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use myvoice::{Theme, UserSettings};

/// Display theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Play,
    Gamer,
    Zen,
}

impl From<Theme> for ThemeName {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Play => ThemeName::Play,
            Theme::Gamer => ThemeName::Gamer,
            Theme::Zen => ThemeName::Zen,
        }
    }
}

impl From<ThemeName> for Theme {
    fn from(theme: ThemeName) -> Self {
        match theme {
            ThemeName::Play => Theme::Play,
            ThemeName::Gamer => Theme::Gamer,
            ThemeName::Zen => Theme::Zen,
        }
    }
}

/// Current settings of a session
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingsResponse {
    pub user_name: String,
    pub theme: ThemeName,
    pub voice: String,
}

impl From<UserSettings> for SettingsResponse {
    fn from(settings: UserSettings) -> Self {
        Self {
            user_name: settings.user_name,
            theme: settings.theme.into(),
            voice: settings.voice,
        }
    }
}

/// Update settings request; missing fields reset to their defaults
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateSettingsRequest {
    pub user_name: Option<String>,
    pub theme: Option<ThemeName>,
    pub voice: Option<String>,
}

/// Update settings response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateSettingsResponse {
    pub success: bool,
    pub settings: SettingsResponse,
}
