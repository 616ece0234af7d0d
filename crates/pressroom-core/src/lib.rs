//! Pressroom Core Library
//!
//! Content resolution and aggregation engine. Resolves a single content
//! record from an ambiguous identifier via an ordered chain of fallback
//! strategies, normalizes heterogeneous media references into renderable
//! URLs, and computes aggregate facts (category counts, related-item
//! sets) by exhaustively walking a paginated remote collection.
//!
//! ## Key Components
//!
//! - `ContentResolver`: the entry point; direct fetch → bounded full
//!   scan → static fallback, terminal on first success
//! - `PaginatedCollector`: strictly sequential exhaustive page walk with
//!   a hard `max_pages` safety cap and best-effort partial results
//! - `media`: media-reference → absolute URL normalization
//! - `source`: the async trait seams backends implement (in-memory fakes
//!   in `fakes`, JSON/REST in the `pressroom-rest` crate)
//!
//! The engine is a library, not a service: no persisted state, no CLI,
//! and the only caller-visible failure signal is an empty result.

pub mod collector;
pub mod config;
pub mod domain;
mod error;
pub mod fakes;
pub mod media;
pub mod obs;
pub mod related;
pub mod resolver;
pub mod source;
pub mod telemetry;

pub use collector::{CancelToken, PaginatedCollector};
pub use config::EngineConfig;
pub use domain::{
    category_key, group_key, is_same_record, matches_identifier, same_category, ContentRecord,
    ContentStatus, MediaRef, PageResult,
};
pub use error::{SourceError, SourceResult};
pub use media::{normalize, normalize_record_media, sanitize_origin};
pub use related::{build_category_counts, build_related, CategoryCount};
pub use resolver::{ContentBundle, ContentResolver, ResolutionResult, ResolutionSource};
pub use source::{ContentSource, PageFetcher, SourcePages};
pub use telemetry::init_tracing;

/// Pressroom version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
