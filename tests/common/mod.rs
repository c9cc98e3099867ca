#![allow(dead_code)]

use std::sync::Arc;

use shortreg::application::services::{CreateParams, RegistryService};
use shortreg::domain::entities::UrlRecord;
use shortreg::infrastructure::persistence::MemoryRecordRepository;
use shortreg::state::AppState;

/// Base URL used for short links in tests.
pub const TEST_BASE_URL: &str = "http://sho.rt";

pub fn create_test_state() -> AppState {
    let repository = Arc::new(MemoryRecordRepository::new());
    let registry = Arc::new(RegistryService::new(repository));
    AppState::new(registry, TEST_BASE_URL)
}

pub async fn create_test_record(state: &AppState, code: &str, url: &str) -> UrlRecord {
    state
        .registry
        .create_short_url(CreateParams::new(url).with_code(code))
        .await
        .unwrap()
}

pub async fn create_record_with_validity(
    state: &AppState,
    code: &str,
    url: &str,
    validity_minutes: i64,
) -> UrlRecord {
    state
        .registry
        .create_short_url(
            CreateParams::new(url)
                .with_code(code)
                .with_validity(validity_minutes),
        )
        .await
        .unwrap()
}

/// Creates a record whose validity window ended an hour ago.
pub async fn create_expired_record(state: &AppState, code: &str, url: &str) -> UrlRecord {
    create_record_with_validity(state, code, url, -60).await
}
