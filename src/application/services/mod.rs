//! Business logic services for the application layer.

pub mod registry;

pub use registry::{CreateParams, RegistryService, DEFAULT_VALIDITY_MINUTES};
