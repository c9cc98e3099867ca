//! Target-URL boundary validation.
//!
//! The registry stores redirect targets verbatim; this module only decides
//! whether a target is acceptable at all.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Validates a redirect target URL.
///
/// # Rules
///
/// - Must parse as an absolute URL
/// - Scheme must be `http` or `https`
///
/// The URL is stored exactly as provided; no normalization is applied.
///
/// # Security
///
/// The scheme allow-list rejects `javascript:`, `data:`, `file:` and
/// similar targets that a redirect must never point at.
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] for malformed URLs and unsupported
/// schemes.
pub fn validate_target_url(input: &str) -> Result<(), AppError> {
    let url = Url::parse(input).map_err(|e| {
        AppError::invalid_input(
            "Valid \"url\" is required",
            json!({ "reason": e.to_string() }),
        )
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::invalid_input(
            "Valid \"url\" is required",
            json!({ "reason": "only http and https URLs are supported", "scheme": url.scheme() }),
        ));
    }

    Ok(())
}
