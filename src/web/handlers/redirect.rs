//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use super::{LOG_PANEL_LIMIT, ShortenerTemplate};

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code at the current time, passing the `Referer` header along
/// 2. On a live code a click is recorded and `307 Temporary Redirect` returned
/// 3. Unknown codes render the creation view with "Shortcode not found" (404)
/// 4. Expired codes render the creation view with "This link has expired." (410)
///
/// # Errors
///
/// Returns 500 if the stored URL cannot be used as a `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let referrer = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok());

    let outcome = state.redirect_service.resolve(&code, referrer).await?;

    match outcome.into_result(&code) {
        Ok(original_url) => {
            let location = HeaderValue::try_from(original_url.as_str()).map_err(|e| {
                AppError::internal(
                    "Stored URL is not a valid Location header",
                    json!({ "code": code, "reason": e.to_string() }),
                )
            })?;

            Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
        }
        Err(err) => {
            let logs = state.activity_log.recent(LOG_PANEL_LIMIT);
            let page = ShortenerTemplate::with_error(&err, logs);
            Ok((err.status_code(), page).into_response())
        }
    }
}
