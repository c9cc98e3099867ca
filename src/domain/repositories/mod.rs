//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data
//! access operations following the Repository pattern. These traits are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations, including the atomicity
//!   guarantees the registry relies on
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`RecordRepository`] - Short-code record storage and click accounting
//!
//! # Testing
//!
//! See integration tests in `tests/repository_record.rs` for usage examples.

pub mod record_repository;

pub use record_repository::{RecordRepository, ResolveOutcome};

#[cfg(test)]
pub use record_repository::MockRecordRepository;
