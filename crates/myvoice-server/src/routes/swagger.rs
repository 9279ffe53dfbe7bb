//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CustomPhraseRequest,
    CustomPhraseResponse,
    // Phrase models
    PhraseRequest,
    PhraseResponse,
    RecordUsageResponse,
    RemoveFromMineResponse,
    SaveToMineResponse,
    // Settings models
    SettingsResponse,
    // Speech models
    SpeakRequest,
    SpeakResponse,
    ThemeName,
    UpdateSettingsRequest,
    UpdateSettingsResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Board endpoints
        super::boards::list_boards,
        super::boards::suggest_words,
        // Mine endpoints
        super::mine::save_to_mine,
        super::mine::list_mine_phrases,
        super::mine::remove_from_mine,
        // Usage endpoints
        super::usage::get_phrase_usage,
        super::usage::record_phrase_usage,
        // Settings endpoints
        super::settings::get_settings,
        super::settings::update_settings,
        // Speech endpoints
        super::speech::speak,
        super::speech::add_custom_phrase,
    ),
    info(
        title = "My Voice API",
        version = "0.1.0",
        description = "Communication boards, word prediction and saved phrases for spellers and non-speakers.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Boards", description = "Built-in boards and word suggestions"),
        (name = "Mine", description = "Mine - User-saved phrases"),
        (name = "Usage", description = "Usage - Phrase usage counters"),
        (name = "Settings", description = "Settings - Session display and voice preferences"),
        (name = "Speech", description = "Speech - Text-to-speech and custom phrase stubs"),
    ),
    components(
        schemas(
            // Phrase
            PhraseResponse,
            PhraseRequest,
            SaveToMineResponse,
            RemoveFromMineResponse,
            RecordUsageResponse,
            CustomPhraseRequest,
            CustomPhraseResponse,
            // Settings
            ThemeName,
            SettingsResponse,
            UpdateSettingsRequest,
            UpdateSettingsResponse,
            // Speech
            SpeakRequest,
            SpeakResponse,
        )
    ),
)]
pub struct ApiDoc;
