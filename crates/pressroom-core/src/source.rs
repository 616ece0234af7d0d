//! Source trait definitions for the content engine.
//!
//! These traits define the seams the pipeline consumes:
//! - `ContentSource`: direct single-record retrieval and page listing
//! - `PageFetcher`: one page of a collection walk
//!
//! All traits are async and backend-agnostic. In-memory fakes are
//! provided for testing via the `fakes` module; `pressroom-rest` supplies
//! the JSON/REST implementation.

use async_trait::async_trait;

use crate::domain::record::{ContentRecord, PageResult};
use crate::error::SourceResult;

/// A remote collection of content records.
///
/// Guarantees expected of implementations:
/// - `fetch_by_identifier` returns `Ok(None)` for an unknown identifier;
///   errors are reserved for transport and decode failures.
/// - `fetch_page` pages are 1-based and never hold more than `page_size`
///   items.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Retrieve a single record by slug, id, or legacy id.
    async fn fetch_by_identifier(&self, identifier: &str)
        -> SourceResult<Option<ContentRecord>>;

    /// Retrieve one page of the collection.
    async fn fetch_page(&self, page: u32, page_size: u32) -> SourceResult<PageResult>;
}

/// One page of a collection walk.
///
/// The collector depends on this rather than on `ContentSource` so a
/// future backend can swap the exhaustive walk for a server-side search
/// or count endpoint without touching the resolver call sites.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, page: u32) -> SourceResult<PageResult>;
}

/// Adapter presenting a `ContentSource` as a `PageFetcher` with a fixed
/// page size.
pub struct SourcePages<'a> {
    source: &'a dyn ContentSource,
    page_size: u32,
}

impl<'a> SourcePages<'a> {
    pub fn new(source: &'a dyn ContentSource, page_size: u32) -> Self {
        Self { source, page_size }
    }
}

#[async_trait]
impl PageFetcher for SourcePages<'_> {
    async fn fetch_page(&self, page: u32) -> SourceResult<PageResult> {
        self.source.fetch_page(page, self.page_size).await
    }
}
