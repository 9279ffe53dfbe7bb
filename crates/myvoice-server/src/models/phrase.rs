//! Phrase - Board entries and Mine requests/responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use myvoice::{DomainError, Phrase};

/// Message kept for clients that match on the original wording
pub const SAVE_REJECTED_MESSAGE: &str = "Phrase already exists in Mine or is empty";
pub const SAVED_MESSAGE: &str = "Phrase saved to Mine";
pub const REMOVED_MESSAGE: &str = "Phrase removed from Mine";

/// Phrase as shown on a board
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhraseResponse {
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

impl From<Phrase> for PhraseResponse {
    fn from(phrase: Phrase) -> Self {
        Self {
            text: phrase.text,
            category: phrase.category,
            icon: phrase.icon,
            color: phrase.color,
            saved_at: phrase.saved_at,
            usage_count: phrase.usage_count,
            auto_saved: phrase.auto_saved,
        }
    }
}

impl From<&Phrase> for PhraseResponse {
    fn from(phrase: &Phrase) -> Self {
        phrase.clone().into()
    }
}

// ============================================
// Request/Response DTOs
// ============================================

/// Word suggestion query
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WordQuery {
    /// Prefix typed so far; empty or absent returns the first 50 words
    pub q: Option<String>,
}

/// Request naming a single phrase (save, remove, usage)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PhraseRequest {
    #[serde(default)]
    pub phrase: String,
}

/// Save to Mine response
///
/// A rejected save is still HTTP 200 with `success: false`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveToMineResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrase: Option<String>,
    pub message: String,
    /// `empty` or `duplicate` when the save was rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SaveToMineResponse {
    pub fn saved(phrase: Phrase) -> Self {
        Self {
            success: true,
            phrase: Some(phrase.text),
            message: SAVED_MESSAGE.to_string(),
            reason: None,
        }
    }

    pub fn rejected(error: &DomainError) -> Self {
        Self {
            success: false,
            phrase: None,
            message: SAVE_REJECTED_MESSAGE.to_string(),
            reason: Some(error.reason().to_string()),
        }
    }
}

/// Remove from Mine response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RemoveFromMineResponse {
    pub success: bool,
    pub message: String,
}

/// Record usage response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecordUsageResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrase: Option<String>,
    pub count: u64,
    /// Whether this use promoted the phrase into Mine
    pub auto_saved: bool,
}

/// Custom phrase request (not persisted)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CustomPhraseRequest {
    #[serde(default)]
    pub phrase: String,
    pub category: Option<String>,
}

/// Custom phrase response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomPhraseResponse {
    pub success: bool,
    pub phrase: String,
    pub category: String,
}
