//! Repository trait for short-code record access.

use crate::domain::entities::{ClickEvent, NewRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Outcome of the atomic resolve-and-record operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The record is live and the click was appended. Carries the redirect
    /// target so callers need no second lookup.
    Live { long_url: String },
    /// The record exists but its validity window has passed. No click
    /// was recorded.
    Expired,
    /// No record exists for the code.
    Missing,
}

/// Repository interface for short-code records.
///
/// The registry's consistency contract lives here: implementations must make
/// `insert` an atomic check-and-claim per code and `record_click` an atomic
/// lookup + expiry check + append + counter increment per record. Operations
/// on different codes must not block one another.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryRecordRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_record.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Claims a code and stores its record in one atomic step.
    ///
    /// When two calls race on the same code, exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    /// Returns [`AppError::Internal`] on store failures.
    async fn insert(&self, new_record: NewRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code.
    ///
    /// The returned record is a point-in-time snapshot; later clicks do not
    /// show up in it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Resolves a code for redirecting, recording `click` on success.
    ///
    /// The expiry check uses `click.clicked_at` as the observation instant,
    /// so the recorded click and the expiry decision always agree on the
    /// time. Expired and missing codes record nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    async fn record_click(
        &self,
        code: &str,
        click: ClickEvent,
    ) -> Result<ResolveOutcome, AppError>;

    /// Counts all stored records, expired ones included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    async fn count(&self) -> Result<u64, AppError>;
}
