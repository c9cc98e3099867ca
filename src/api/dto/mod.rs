//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Wire field names are camelCase where they differ
//! from the Rust field names.

pub mod clicks;
pub mod health;
pub mod shorten;
pub mod stats;
