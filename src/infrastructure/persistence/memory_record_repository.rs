//! In-memory implementation of the record repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::entities::{ClickEvent, NewRecord, UrlRecord};
use crate::domain::repositories::{RecordRepository, ResolveOutcome};
use crate::error::AppError;

/// In-memory repository for short-code records.
///
/// Backed by a sharded concurrent map. The shard write guard makes each
/// operation atomic per code: `insert` claims a code with the `entry` API,
/// and `record_click` performs the expiry check, click append and counter
/// increment without releasing the guard in between. Operations on codes in
/// different shards proceed in parallel.
///
/// Records live for the process lifetime; nothing is ever removed.
#[derive(Default)]
pub struct MemoryRecordRepository {
    records: DashMap<String, UrlRecord>,
}

impl MemoryRecordRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }
}

#[async_trait]
impl RecordRepository for MemoryRecordRepository {
    async fn insert(&self, new_record: NewRecord) -> Result<UrlRecord, AppError> {
        let record = UrlRecord::from(new_record);

        match self.records.entry(record.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Shortcode already exists",
                json!({ "code": record.code }),
            )),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.records.get(code).map(|record| record.value().clone()))
    }

    async fn record_click(
        &self,
        code: &str,
        click: ClickEvent,
    ) -> Result<ResolveOutcome, AppError> {
        let Some(mut record) = self.records.get_mut(code) else {
            return Ok(ResolveOutcome::Missing);
        };

        if record.is_expired_at(click.clicked_at) {
            return Ok(ResolveOutcome::Expired);
        }

        let long_url = record.long_url.clone();
        record.clicks.push(click);
        record.click_count += 1;

        Ok(ResolveOutcome::Live { long_url })
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.records.len() as u64)
    }
}
