//! URL record entity: one short code mapped to its redirect target.

use chrono::{DateTime, Utc};

use super::click::ClickEvent;

/// A registered short-code record.
///
/// `code`, `long_url`, `created_at` and `expires_at` are fixed at creation.
/// Only the click fields change afterwards, and always together: the store
/// keeps `click_count` equal to `clicks.len()` at every observable point.
/// Records are never deleted; expiry only stops redirects.
#[derive(Debug, Clone)]
pub struct UrlRecord {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: u64,
    pub clicks: Vec<ClickEvent>,
}

impl UrlRecord {
    /// Returns true if the record's validity window had passed at `at`.
    ///
    /// The comparison is strict: a record observed exactly at its expiry
    /// instant is still live.
    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        at > self.expires_at
    }
}

impl From<NewRecord> for UrlRecord {
    fn from(new: NewRecord) -> Self {
        Self {
            code: new.code,
            long_url: new.long_url,
            created_at: new.created_at,
            expires_at: new.expires_at,
            click_count: 0,
            clicks: Vec::new(),
        }
    }
}

/// Input data for registering a new record.
///
/// The store materializes the full [`UrlRecord`] from this, starting with an
/// empty click history.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
