//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Extract the referrer header and peer address
/// 2. Resolve the code: one atomic expiry check + click append
/// 3. Return 307 Temporary Redirect
///
/// # Click Tracking
///
/// The click is recorded before the response is produced, so a client that
/// observes the redirect can immediately read its own click in the stats
/// endpoint. Expired and unknown codes record nothing.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 410 Gone if the code's validity window has passed.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let referrer = headers.get(header::REFERER).and_then(|v| v.to_str().ok());

    let long_url = state
        .registry
        .resolve(&code, referrer, addr.ip().to_string())
        .await?;

    debug!(code = %code, "Redirecting");

    Ok(Redirect::temporary(&long_url))
}
