//! Handler for short URL statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::clicks::ClickInfo;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves the statistics snapshot for a short URL.
///
/// # Endpoint
///
/// `GET /shorturls/{code}`
///
/// # Response
///
/// Returns the target URL, creation and expiry instants, the click count,
/// and every recorded click in chronological order. Expired codes stay
/// inspectable; expiry only stops redirects.
///
/// ```json
/// {
///   "longUrl": "https://example.com/some/long/path",
///   "createdAt": "2026-01-01T12:00:00Z",
///   "expiry": "2026-01-01T12:30:00Z",
///   "clickCount": 1,
///   "clicks": [
///     {
///       "timestamp": "2026-01-01T12:05:00Z",
///       "referrer": "https://google.com",
///       "origin": "192.168.1.1"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.registry.inspect(&code).await?;

    let response = StatsResponse {
        long_url: record.long_url,
        created_at: record.created_at,
        expiry: record.expires_at,
        click_count: record.click_count,
        clicks: record
            .clicks
            .into_iter()
            .map(|click| ClickInfo {
                timestamp: click.clicked_at,
                referrer: click.referrer,
                origin: click.origin,
            })
            .collect(),
    };

    Ok(Json(response))
}
