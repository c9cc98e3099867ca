//! Short-code registry service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::domain::entities::{ClickEvent, NewRecord, UrlRecord};
use crate::domain::repositories::{RecordRepository, ResolveOutcome};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_requested_code};
use crate::utils::url_validator::validate_target_url;

/// Validity window applied when a create request does not specify one.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Parameters for creating a short URL.
///
/// Optional inputs carry documented defaults instead of hiding them at call
/// sites: validity defaults to [`DEFAULT_VALIDITY_MINUTES`] and the code is
/// generated unless one is requested.
#[derive(Debug, Clone)]
pub struct CreateParams {
    pub long_url: String,
    pub validity_minutes: i64,
    pub requested_code: Option<String>,
}

impl CreateParams {
    /// Creates parameters with the default validity and a generated code.
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            validity_minutes: DEFAULT_VALIDITY_MINUTES,
            requested_code: None,
        }
    }

    /// Overrides the validity window in minutes.
    ///
    /// Any value is accepted; zero and negative values produce records that
    /// are already expired when created.
    pub fn with_validity(mut self, minutes: i64) -> Self {
        self.validity_minutes = minutes;
        self
    }

    /// Requests a specific short code instead of a generated one.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.requested_code = Some(code.into());
        self
    }
}

/// Service owning the short-code registry.
///
/// Validates inputs at the boundary, allocates codes, and delegates the
/// per-record atomicity (code claiming, click accounting) to the repository.
/// Holds no state of its own beyond the injected repository, so tests can
/// construct isolated instances freely.
pub struct RegistryService<R: RecordRepository> {
    repository: Arc<R>,
}

impl<R: RecordRepository> RegistryService<R> {
    /// Creates a new registry service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short URL record.
    ///
    /// # Code Allocation
    ///
    /// - If `params.requested_code` is present, it is validated and claimed
    ///   as-is; a taken code is a conflict, never silently replaced
    /// - Otherwise a random 8-character code is generated, retrying up to
    ///   10 times on collision before giving up
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL or requested code fails
    /// boundary validation, [`AppError::Conflict`] if the requested code is
    /// taken, and [`AppError::ResourceExhausted`] when generation runs out
    /// of retries.
    pub async fn create_short_url(&self, params: CreateParams) -> Result<UrlRecord, AppError> {
        validate_target_url(&params.long_url)?;

        let created_at = Utc::now();
        let expires_at = compute_expiry(created_at, params.validity_minutes)?;

        match params.requested_code {
            Some(requested) => {
                validate_requested_code(&requested)?;

                self.repository
                    .insert(NewRecord {
                        code: requested,
                        long_url: params.long_url,
                        created_at,
                        expires_at,
                    })
                    .await
            }
            None => {
                self.insert_with_generated_code(params.long_url, created_at, expires_at)
                    .await
            }
        }
    }

    /// Resolves a code for redirecting and records the click.
    ///
    /// Captures the observation timestamp exactly once; the expiry decision
    /// and the recorded click always agree on the time. Nothing is recorded
    /// for expired or unknown codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Expired`] once the validity window has passed.
    pub async fn resolve(
        &self,
        code: &str,
        referrer: Option<&str>,
        origin: String,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let click = ClickEvent::new(now, referrer, origin);

        match self.repository.record_click(code, click).await? {
            ResolveOutcome::Live { long_url } => Ok(long_url),
            ResolveOutcome::Expired => Err(AppError::expired(
                "Short URL expired",
                json!({ "code": code }),
            )),
            ResolveOutcome::Missing => Err(AppError::not_found(
                "Short URL not found",
                json!({ "code": code }),
            )),
        }
    }

    /// Retrieves a read-only snapshot of a record.
    ///
    /// Works on expired records too; expiry only gates redirects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    pub async fn inspect(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))
    }

    /// Counts stored records, for health reporting.
    pub async fn record_count(&self) -> Result<u64, AppError> {
        self.repository.count().await
    }

    /// Claims a generated code, retrying on collision.
    ///
    /// The uniqueness check and the claim are one atomic `insert`; a lost
    /// race simply shows up as a conflict and costs one retry.
    async fn insert_with_generated_code(
        &self,
        long_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<UrlRecord, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let new_record = NewRecord {
                code: generate_code(),
                long_url: long_url.clone(),
                created_at,
                expires_at,
            };

            match self.repository.insert(new_record).await {
                Ok(record) => return Ok(record),
                Err(AppError::Conflict { .. }) => continue,
                Err(other) => return Err(other),
            }
        }

        Err(AppError::resource_exhausted(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": MAX_ATTEMPTS }),
        ))
    }
}

/// Computes the expiry instant for a validity window.
///
/// Rejects only values whose expiry cannot be represented.
fn compute_expiry(
    created_at: DateTime<Utc>,
    validity_minutes: i64,
) -> Result<DateTime<Utc>, AppError> {
    Duration::try_minutes(validity_minutes)
        .and_then(|validity| created_at.checked_add_signed(validity))
        .ok_or_else(|| {
            AppError::invalid_input(
                "Validity is out of range",
                json!({ "validity": validity_minutes }),
            )
        })
}
