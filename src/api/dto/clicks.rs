//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Individual click event information.
///
/// `referrer` is never absent; direct visits carry the `"direct"` sentinel.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub origin: String,
}
