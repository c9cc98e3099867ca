//! Utility functions for code generation and URL validation.
//!
//! This module provides helper functions used across the application:
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Redirect-target boundary validation

pub mod code_generator;
pub mod url_validator;
