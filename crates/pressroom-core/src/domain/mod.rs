//! Domain models for the content engine.
//!
//! Canonical definitions for the core entities:
//! - `ContentRecord`: the shape every pipeline stage consumes
//! - `MediaRef`: the union of media-reference shapes found in the wild
//! - `PageResult`: one page of a paginated collection
//!
//! All entities are value objects, created and discarded per call; the
//! engine keeps no shared mutable state between calls.

pub mod category;
pub mod identifier;
pub mod record;

// Re-export main types
pub use category::{category_key, group_key, same_category};
pub use identifier::{is_same_record, matches_identifier};
pub use record::{ContentRecord, ContentStatus, MediaRef, PageResult};
