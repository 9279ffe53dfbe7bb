//! Generic fallback pages for unmatched routes and handler panics

use std::any::Any;

use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head><meta charset="utf-8" /><title>Page not found - My Voice</title></head>
  <body>
    <h1>Page not found</h1>
    <p>The page you are looking for does not exist.</p>
    <p><a href="/">Back to My Voice</a></p>
  </body>
</html>
"#;

const INTERNAL_ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head><meta charset="utf-8" /><title>Something went wrong - My Voice</title></head>
  <body>
    <h1>Something went wrong</h1>
    <p>Please try again in a moment.</p>
    <p><a href="/">Back to My Voice</a></p>
  </body>
</html>
"#;

/// Router fallback
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!("No route for {}", uri);
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}

/// Panic handler for CatchPanicLayer
pub fn internal_error(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);
    (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
}
