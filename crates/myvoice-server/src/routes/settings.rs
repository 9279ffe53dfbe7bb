//! Settings Routes - Session display and voice preferences
//!
//! The session is named by the `myvoice_session` cookie; a new one is
//! issued when the request carries none.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{SettingsResponse, UpdateSettingsRequest, UpdateSettingsResponse};
use crate::session::RequestSession;
use crate::AppState;

/// Get settings of the current session
#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Current settings (defaults for a new session)", body = SettingsResponse)
    ),
    tag = "Settings"
)]
pub async fn get_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let session = RequestSession::from_headers(&headers);
    let settings = state.settings_service.get(session.id).await?;

    Ok(with_session_cookie(
        Json(SettingsResponse::from(settings)).into_response(),
        &session,
        state.secure_cookie,
    ))
}

/// Replace settings of the current session
#[utoipa::path(
    post,
    path = "/api/settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Settings updated", body = UpdateSettingsResponse),
        (status = 400, description = "Malformed JSON body or unknown theme")
    ),
    tag = "Settings"
)]
pub async fn update_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateSettingsRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload?;
    let session = RequestSession::from_headers(&headers);

    let settings = state
        .settings_service
        .update(
            session.id,
            payload.user_name,
            payload.theme.map(Into::into),
            payload.voice,
        )
        .await?;

    let body = UpdateSettingsResponse {
        success: true,
        settings: settings.into(),
    };

    Ok(with_session_cookie(
        Json(body).into_response(),
        &session,
        state.secure_cookie,
    ))
}

fn with_session_cookie(
    mut response: Response,
    session: &RequestSession,
    secure: bool,
) -> Response {
    if let Some(cookie) = session.set_cookie(secure) {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/settings", get(get_settings).post(update_settings))
}
