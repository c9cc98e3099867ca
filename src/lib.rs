//! # shortreg
//!
//! An in-memory URL shortener registry with click analytics, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory record storage
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random or caller-chosen short codes with atomic claiming
//! - Per-redirect click tracking (timestamp, referrer, origin) recorded
//!   synchronously with the redirect decision
//! - Lazy expiry: codes stop redirecting after their validity window, but
//!   records stay inspectable
//! - Statistics endpoint exposing the full click history per code
//!
//! ## Quick Start
//!
//! ```bash
//! # All configuration is optional
//! export BASE_URL="http://localhost:3000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CreateParams, RegistryService};
    pub use crate::domain::entities::{ClickEvent, NewRecord, UrlRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
