//! Handler for the short URL creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::api::dto::shorten::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::application::services::CreateParams;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long target.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "validity": 30,          // optional, minutes
///   "shortcode": "my-link"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the full short link and the expiry instant:
///
/// ```json
/// {
///   "shortLink": "http://localhost:3000/abc12345",
///   "expiry": "2026-01-01T12:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for malformed bodies and invalid inputs,
/// 409 Conflict if the requested shortcode is taken, and
/// 503 Service Unavailable if code generation runs out of retries.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShortUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::invalid_input(
            "Valid \"url\" is required",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let mut params = CreateParams::new(payload.url);
    if let Some(validity) = payload.validity {
        params = params.with_validity(validity);
    }
    if let Some(shortcode) = payload.shortcode {
        params = params.with_code(shortcode);
    }

    let record = state.registry.create_short_url(params).await?;

    info!(code = %record.code, "Short URL created");

    Ok((
        StatusCode::CREATED,
        Json(CreateShortUrlResponse {
            short_link: state.short_link(&record.code),
            expiry: record.expires_at,
        }),
    ))
}
