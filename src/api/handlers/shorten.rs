//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::shorten::{BatchSummary, ShortenRequest, ShortenResponse, ShortenResultItem};
use crate::application::services::{CreationOutcome, CreationRequest, RowOutcome};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_link::short_url;

/// Creates shortened URLs for one to five long URLs.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Batch Processing
///
/// Every row is attempted. Rows that succeed stay committed even when another row
/// fails; nothing is rolled back.
///
/// # Request Body
///
/// ```json
/// {
///   "urls": [
///     {
///       "url": "https://example.com",
///       "validity_minutes": 10,     // optional, default 30
///       "custom_code": "my-link"    // optional
///     }
///   ]
/// }
/// ```
///
/// # Response
///
/// `201 Created` when every row succeeded:
///
/// ```json
/// {
///   "summary": { "total": 1, "successful": 1, "failed": 0 },
///   "items": [
///     {
///       "original_url": "https://example.com",
///       "code": "my-link",
///       "short_url": "http://localhost:3000/my-link",
///       "expires_at": "2025-01-01T12:10:00Z"
///     }
///   ]
/// }
/// ```
///
/// When any row failed, the status of the last failing row is used and an `error`
/// field with that row's error is added next to the per-row `items`.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is empty or holds more than five URLs.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let origin = state.origin(&headers);
    let requests: Vec<CreationRequest> = payload.urls.into_iter().map(Into::into).collect();
    let submitted_urls: Vec<String> = requests
        .iter()
        .map(|request| request.original_url.clone())
        .collect();

    match state.link_service.submit(requests).await {
        Ok(created) => {
            let items: Vec<ShortenResultItem> = created
                .into_iter()
                .map(|outcome| success_item(&origin, outcome))
                .collect();

            let response = ShortenResponse {
                summary: BatchSummary {
                    total: items.len(),
                    successful: items.len(),
                    failed: 0,
                },
                items,
                error: None,
            };

            Ok((StatusCode::CREATED, Json(response)).into_response())
        }
        Err(failure) if failure.outcomes.is_empty() => Err(failure.error),
        Err(failure) => {
            let total = failure.outcomes.len();
            let mut successful = 0;
            let mut failed = 0;

            let items = failure
                .outcomes
                .into_iter()
                .zip(submitted_urls)
                .map(|(outcome, original_url)| match outcome {
                    RowOutcome::Created(created) => {
                        successful += 1;
                        success_item(&origin, created)
                    }
                    RowOutcome::Failed(err) => {
                        failed += 1;
                        ShortenResultItem::Error {
                            original_url,
                            error: err.to_error_info(),
                        }
                    }
                })
                .collect();

            let response = ShortenResponse {
                summary: BatchSummary {
                    total,
                    successful,
                    failed,
                },
                items,
                error: Some(failure.error.to_error_info()),
            };

            Ok((failure.error.status_code(), Json(response)).into_response())
        }
    }
}

fn success_item(origin: &str, outcome: CreationOutcome) -> ShortenResultItem {
    ShortenResultItem::Success {
        short_url: short_url(origin, &outcome.code),
        original_url: outcome.original_url,
        code: outcome.code,
        expires_at: outcome.expires_at,
    }
}
