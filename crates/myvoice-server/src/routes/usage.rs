//! Usage Routes - Phrase usage counters

use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{PhraseRequest, RecordUsageResponse};
use crate::AppState;

/// Usage count per phrase
#[utoipa::path(
    get,
    path = "/api/phrase-usage",
    responses(
        (status = 200, description = "Phrase text to usage count", body = HashMap<String, u64>)
    ),
    tag = "Usage"
)]
pub async fn get_phrase_usage(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, u64>>, ApiError> {
    Ok(Json(state.phrase_service.usage().await?))
}

/// Record one use of a phrase
#[utoipa::path(
    post,
    path = "/api/phrase-usage",
    request_body = PhraseRequest,
    responses(
        (status = 200, description = "New count; `success: false` for a blank phrase", body = RecordUsageResponse),
        (status = 400, description = "Malformed JSON body")
    ),
    tag = "Usage"
)]
pub async fn record_phrase_usage(
    State(state): State<AppState>,
    payload: Result<Json<PhraseRequest>, JsonRejection>,
) -> Result<Json<RecordUsageResponse>, ApiError> {
    let Json(payload) = payload?;

    match state.phrase_service.record_usage(&payload.phrase).await {
        Ok(record) => Ok(Json(RecordUsageResponse {
            success: true,
            phrase: Some(record.phrase),
            count: record.count,
            auto_saved: record.auto_saved.is_some(),
        })),
        Err(e) if e.is_rejection() => Ok(Json(RecordUsageResponse {
            success: false,
            phrase: None,
            count: 0,
            auto_saved: false,
        })),
        Err(e) => Err(e.into()),
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/phrase-usage",
        get(get_phrase_usage).post(record_phrase_usage),
    )
}
