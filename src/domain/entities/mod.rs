//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the URL registry. Entities are plain data structures with the
//! minimal logic that belongs to them (expiry evaluation, referrer sentinel).
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A registered short code with its click history
//! - [`ClickEvent`] - A single recorded redirect access
//!
//! # Design Pattern
//!
//! Record creation goes through a separate input struct, [`NewRecord`]; the
//! store materializes the full [`UrlRecord`] from it with an empty click
//! history. All entities include unit tests demonstrating their construction
//! and usage.

pub mod click;
pub mod record;

pub use click::{ClickEvent, DIRECT_REFERRER};
pub use record::{NewRecord, UrlRecord};
