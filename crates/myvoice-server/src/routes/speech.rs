//! Speech and custom phrase stubs
//!
//! Both echo their input; nothing is synthesized or stored.

use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};

use myvoice::{UserSettings, MINE_CATEGORY};

use crate::error::ApiError;
use crate::models::{
    CustomPhraseRequest, CustomPhraseResponse, SpeakRequest, SpeakResponse, SPEECH_STUB_MESSAGE,
};
use crate::AppState;

/// Speak text (stub)
#[utoipa::path(
    post,
    path = "/api/speak",
    request_body = SpeakRequest,
    responses(
        (status = 200, description = "Echo of the request", body = SpeakResponse),
        (status = 400, description = "Malformed JSON body")
    ),
    tag = "Speech"
)]
pub async fn speak(
    payload: Result<Json<SpeakRequest>, JsonRejection>,
) -> Result<Json<SpeakResponse>, ApiError> {
    let Json(payload) = payload?;
    let voice = payload
        .voice
        .unwrap_or_else(|| UserSettings::default().voice);

    tracing::debug!("Speak requested with voice {}", voice);

    Ok(Json(SpeakResponse {
        success: true,
        text: payload.text,
        voice,
        message: SPEECH_STUB_MESSAGE.to_string(),
    }))
}

/// Add a custom phrase (stub, not persisted)
#[utoipa::path(
    post,
    path = "/api/custom-phrase",
    request_body = CustomPhraseRequest,
    responses(
        (status = 200, description = "Echo of the request", body = CustomPhraseResponse),
        (status = 400, description = "Malformed JSON body")
    ),
    tag = "Speech"
)]
pub async fn add_custom_phrase(
    payload: Result<Json<CustomPhraseRequest>, JsonRejection>,
) -> Result<Json<CustomPhraseResponse>, ApiError> {
    let Json(payload) = payload?;

    Ok(Json(CustomPhraseResponse {
        success: true,
        phrase: payload.phrase,
        category: payload
            .category
            .unwrap_or_else(|| MINE_CATEGORY.to_string()),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/speak", post(speak))
        .route("/api/custom-phrase", post(add_custom_phrase))
}
