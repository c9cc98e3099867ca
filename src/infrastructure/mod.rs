//! Infrastructure layer for storage backends.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence.
//!
//! # Modules
//!
//! - [`persistence`] - Repository implementations

pub mod persistence;
