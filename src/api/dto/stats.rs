//! DTOs for the short URL statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;

/// Statistics snapshot for a short URL.
///
/// Carries the full click history in chronological order; `click_count`
/// always equals `clicks.len()`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub click_count: u64,
    pub clicks: Vec<ClickInfo>,
}
