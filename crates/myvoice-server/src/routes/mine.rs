//! Mine Routes - User-saved phrases
//!
//! HTTP handlers that delegate to PhraseService. A rejected save is a
//! normal response with `success: false`, not an HTTP error.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{
    PhraseRequest, PhraseResponse, RemoveFromMineResponse, SaveToMineResponse, REMOVED_MESSAGE,
};
use crate::AppState;

/// Save a phrase to Mine
#[utoipa::path(
    post,
    path = "/api/save-to-mine",
    request_body = PhraseRequest,
    responses(
        (status = 200, description = "Save result; check `success`", body = SaveToMineResponse),
        (status = 400, description = "Malformed JSON body")
    ),
    tag = "Mine"
)]
pub async fn save_to_mine(
    State(state): State<AppState>,
    payload: Result<Json<PhraseRequest>, JsonRejection>,
) -> Result<Json<SaveToMineResponse>, ApiError> {
    let Json(payload) = payload?;

    match state.phrase_service.save(&payload.phrase).await {
        Ok(phrase) => Ok(Json(SaveToMineResponse::saved(phrase))),
        Err(e) if e.is_rejection() => Ok(Json(SaveToMineResponse::rejected(&e))),
        Err(e) => Err(e.into()),
    }
}

/// List default and user-saved Mine phrases
#[utoipa::path(
    get,
    path = "/api/mine-phrases",
    responses(
        (status = 200, description = "Defaults first, then saved phrases in save order", body = Vec<PhraseResponse>)
    ),
    tag = "Mine"
)]
pub async fn list_mine_phrases(
    State(state): State<AppState>,
) -> Result<Json<Vec<PhraseResponse>>, ApiError> {
    let phrases = state.phrase_service.list_mine().await?;
    Ok(Json(phrases.into_iter().map(PhraseResponse::from).collect()))
}

/// Remove a phrase from Mine
#[utoipa::path(
    post,
    path = "/api/remove-from-mine",
    request_body = PhraseRequest,
    responses(
        (status = 200, description = "Always succeeds, even when nothing matched", body = RemoveFromMineResponse),
        (status = 400, description = "Malformed JSON body")
    ),
    tag = "Mine"
)]
pub async fn remove_from_mine(
    State(state): State<AppState>,
    payload: Result<Json<PhraseRequest>, JsonRejection>,
) -> Result<Json<RemoveFromMineResponse>, ApiError> {
    let Json(payload) = payload?;
    state.phrase_service.remove(&payload.phrase).await?;

    Ok(Json(RemoveFromMineResponse {
        success: true,
        message: REMOVED_MESSAGE.to_string(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/save-to-mine", post(save_to_mine))
        .route("/api/mine-phrases", get(list_mine_phrases))
        .route("/api/remove-from-mine", post(remove_from_mine))
}
