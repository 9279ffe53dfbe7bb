//! UserSettings - Per-session display and voice preferences

use serde::{Deserialize, Serialize};

use crate::domain::Theme;

pub const DEFAULT_USER_NAME: &str = "My";
pub const DEFAULT_VOICE: &str = "system";

/// Settings record for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub user_name: String,
    pub theme: Theme,
    pub voice: String,
}

impl UserSettings {
    /// Build a full record, substituting defaults for missing fields
    pub fn from_parts(
        user_name: Option<String>,
        theme: Option<Theme>,
        voice: Option<String>,
    ) -> Self {
        Self {
            user_name: user_name.unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
            theme: theme.unwrap_or_default(),
            voice: voice.unwrap_or_else(|| DEFAULT_VOICE.to_string()),
        }
    }
}

impl Default for UserSettings {
    fn default() -> Self {
        Self::from_parts(None, None, None)
    }
}
