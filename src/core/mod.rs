//! Core types for restaurant-site.
//!
//! This module contains the `Record` model loaded from the dataset and the
//! slug generation pass that turns records into `SiteEntry` values.

pub mod schema;
pub mod slug;

// Re-export key types for convenience
pub use schema::{Record, SiteEntry, Slug};
pub use slug::{SlugRegistry, assign_slugs, normalize};
