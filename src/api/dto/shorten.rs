//! DTOs for the short URL creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortUrlRequest {
    /// The redirect target (must be a valid HTTP/HTTPS URL).
    #[validate(length(min = 1, message = "url must not be empty"))]
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Validity window in whole minutes. Defaults to 30 when omitted; zero
    /// and negative values create records that are already expired.
    pub validity: Option<i64>,

    /// Optional caller-chosen short code. Validated against the same
    /// alphabet generated codes use.
    pub shortcode: Option<String>,
}

/// Response for a created short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    /// Full short link: configured base URL plus the code.
    pub short_link: String,

    /// Instant the code stops redirecting.
    pub expiry: DateTime<Utc>,
}
