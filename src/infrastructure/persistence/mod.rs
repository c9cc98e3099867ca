//! Repository implementations.
//!
//! Concrete implementations of domain repository traits. The only backend in
//! scope is the in-process memory store; everything lives and dies with the
//! server process.
//!
//! # Repositories
//!
//! - [`MemoryRecordRepository`] - sharded in-memory record storage

pub mod memory_record_repository;

pub use memory_record_repository::MemoryRecordRepository;
