//! Board and word suggestion routes

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::models::{PhraseResponse, WordQuery};
use crate::AppState;

/// List all built-in boards
#[utoipa::path(
    get,
    path = "/api/boards",
    responses(
        (status = 200, description = "Board name to ordered phrases", body = BTreeMap<String, Vec<PhraseResponse>>)
    ),
    tag = "Boards"
)]
pub async fn list_boards(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, Vec<PhraseResponse>>> {
    let boards: BTreeMap<String, Vec<PhraseResponse>> = state
        .catalog
        .boards()
        .iter()
        .map(|(name, phrases)| {
            (
                name.to_string(),
                phrases.iter().map(PhraseResponse::from).collect::<Vec<_>>(),
            )
        })
        .collect();

    Json(boards)
}

/// Word suggestions for a typed prefix
#[utoipa::path(
    get,
    path = "/api/words",
    params(WordQuery),
    responses(
        (status = 200, description = "Up to 20 prefix matches, or the first 50 words when q is empty", body = Vec<String>)
    ),
    tag = "Boards"
)]
pub async fn suggest_words(
    State(state): State<AppState>,
    Query(query): Query<WordQuery>,
) -> Json<Vec<String>> {
    Json(state.catalog.suggest(query.q.as_deref()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/boards", get(list_boards))
        .route("/api/words", get(suggest_words))
}
