//! Phrase - A single entry on a communication board

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category assigned to phrases saved into Mine
pub const MINE_CATEGORY: &str = "mine";

/// Phrase - text with optional display hints and Mine bookkeeping
///
/// `text` is the identity key. Absent optional fields are omitted when
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_saved: Option<bool>,
}

impl Phrase {
    /// Built-in phrase with a category only
    pub fn categorized(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: Some(category.into()),
            icon: None,
            color: None,
            saved_at: None,
            usage_count: None,
            auto_saved: None,
        }
    }

    /// Built-in phrase with an icon and a color
    pub fn decorated(
        text: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            category: None,
            icon: Some(icon.into()),
            color: Some(color.into()),
            saved_at: None,
            usage_count: None,
            auto_saved: None,
        }
    }

    /// Phrase saved into Mine now, carrying the usage count seen at save time
    pub fn saved_to_mine(text: impl Into<String>, usage_count: u64) -> Self {
        Self {
            text: text.into(),
            category: Some(MINE_CATEGORY.to_string()),
            icon: None,
            color: None,
            saved_at: Some(Utc::now()),
            usage_count: Some(usage_count),
            auto_saved: None,
        }
    }

    /// Mark the phrase as promoted automatically
    pub fn with_auto_saved(mut self) -> Self {
        self.auto_saved = Some(true);
        self
    }

    pub fn is_auto_saved(&self) -> bool {
        self.auto_saved.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorated_phrase_omits_missing_fields() {
        let phrase = Phrase::decorated("Hello", "👋", "#ffd93d");
        let json = serde_json::to_value(&phrase).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"text": "Hello", "icon": "👋", "color": "#ffd93d"})
        );
    }

    #[test]
    fn test_saved_to_mine_fields() {
        let phrase = Phrase::saved_to_mine("Let's go outside", 3);

        assert_eq!(phrase.category.as_deref(), Some(MINE_CATEGORY));
        assert_eq!(phrase.usage_count, Some(3));
        assert!(phrase.saved_at.is_some());
        assert!(!phrase.is_auto_saved());
        assert!(phrase.with_auto_saved().is_auto_saved());
    }
}
