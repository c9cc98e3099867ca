//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for caller-requested codes.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Length of random bytes before base64 encoding. Six bytes encode to an
/// eight-character code.
const CODE_LENGTH_BYTES: usize = 6;

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 8;

/// Maximum length accepted for a caller-requested code.
const MAX_REQUESTED_CODE_LENGTH: usize = 64;

/// Codes that cannot be claimed as short links.
///
/// These collide with service routes and would never be reachable through
/// the redirect path.
pub const RESERVED_CODES: &[&str] = &["shorturls", "health"];

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing an 8-character code over `[A-Za-z0-9_-]`.
/// Uniqueness is not guaranteed here; the registry verifies it when the
/// code is claimed.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Validates a caller-requested short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: letters, digits, hyphens, underscores (the same
///   alphabet generated codes use, so every code stays a single URL path
///   segment)
/// - Cannot be a reserved service route
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] if any rule is violated.
///
/// # Examples
///
/// ```ignore
/// // Valid codes
/// assert!(validate_requested_code("promo-2025").is_ok());
/// assert!(validate_requested_code("x").is_ok());
///
/// // Invalid codes
/// assert!(validate_requested_code("").is_err());          // Empty
/// assert!(validate_requested_code("a/b").is_err());       // Path separator
/// assert!(validate_requested_code("health").is_err());    // Reserved
/// ```
pub fn validate_requested_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_REQUESTED_CODE_LENGTH {
        return Err(AppError::invalid_input(
            "Shortcode must be 1-64 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::invalid_input(
            "Shortcode can only contain letters, digits, hyphens, and underscores",
            json!({ "shortcode": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::invalid_input(
            "This shortcode is reserved",
            json!({ "shortcode": code }),
        ));
    }

    Ok(())
}
