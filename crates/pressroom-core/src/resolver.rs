//! Fallback-chain content resolution.
//!
//! The resolver is the engine's entry point. Given an ambiguous
//! identifier it tries, in order: direct single-record retrieval, a
//! bounded full-collection scan, and a static in-process dataset. The
//! chain is terminal on first success, and a strategy failure is never an
//! error, only a reason to fall through.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::collector::{CancelToken, PaginatedCollector};
use crate::config::EngineConfig;
use crate::domain::identifier::matches_identifier;
use crate::domain::record::ContentRecord;
use crate::media::normalize_record_media;
use crate::obs;
use crate::related::{build_category_counts, build_related, CategoryCount};
use crate::source::{ContentSource, SourcePages};

/// Which strategy produced a resolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionSource {
    Direct,
    FullScan,
    StaticFallback,
    NotFound,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionSource::Direct => "direct",
            ResolutionSource::FullScan => "full-scan",
            ResolutionSource::StaticFallback => "static-fallback",
            ResolutionSource::NotFound => "not-found",
        }
    }
}

/// Outcome of one resolution request.
///
/// Constructed fresh per request; the engine never caches these. A failed
/// resolution is `record: None` with `source: NotFound`, never an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolutionResult {
    pub record: Option<ContentRecord>,
    pub source: ResolutionSource,
}

impl ResolutionResult {
    fn not_found() -> Self {
        Self {
            record: None,
            source: ResolutionSource::NotFound,
        }
    }
}

/// A resolution plus the aggregates the detail views render next to it,
/// computed from a single collection walk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentBundle {
    pub resolution: ResolutionResult,
    pub related: Vec<ContentRecord>,
    pub categories: Vec<CategoryCount>,
}

/// Resolves content records through the ordered fallback chain.
pub struct ContentResolver {
    source: Arc<dyn ContentSource>,
    static_dataset: Arc<Vec<ContentRecord>>,
    collector: PaginatedCollector,
    config: EngineConfig,
}

impl ContentResolver {
    /// Create a resolver over a source and an injected static fallback
    /// dataset (immutable for the resolver's lifetime).
    pub fn new(
        source: Arc<dyn ContentSource>,
        static_dataset: Vec<ContentRecord>,
        config: EngineConfig,
    ) -> Self {
        Self {
            source,
            static_dataset: Arc::new(static_dataset),
            collector: PaginatedCollector::new(config.page_size, config.max_pages),
            config,
        }
    }

    /// Resolve an identifier through the chain: direct fetch, bounded
    /// full scan, static dataset.
    ///
    /// Every strategy failure is caught and logged; the caller only ever
    /// branches on `record` being present. Media fields on a returned
    /// record are already normalized against the configured origin.
    pub async fn resolve(&self, identifier: &str, cancel: &CancelToken) -> ResolutionResult {
        let _span = obs::ResolveSpan::enter(identifier);
        obs::emit_resolve_started(identifier);

        if let Some(record) = self.try_direct(identifier).await {
            return self.finish(identifier, record, ResolutionSource::Direct);
        }

        let collection = self.walk_collection(cancel).await;
        if let Some(record) = self.scan(&collection, identifier) {
            return self.finish(identifier, record, ResolutionSource::FullScan);
        }

        if let Some(record) = self.scan(&self.static_dataset, identifier) {
            return self.finish(identifier, record, ResolutionSource::StaticFallback);
        }

        obs::emit_resolve_finished(identifier, ResolutionSource::NotFound.as_str(), false);
        ResolutionResult::not_found()
    }

    /// Resolve an identifier and compute the aggregates next to it.
    ///
    /// Performs exactly one bounded collection walk and feeds it to both
    /// the related-set builder and the category counter, whichever
    /// strategy produced the record itself.
    pub async fn resolve_bundle(&self, identifier: &str, cancel: &CancelToken) -> ContentBundle {
        let _span = obs::ResolveSpan::enter(identifier);
        obs::emit_resolve_started(identifier);

        let direct = self.try_direct(identifier).await;
        let collection = self.walk_collection(cancel).await;

        let resolution = if let Some(record) = direct {
            self.finish(identifier, record, ResolutionSource::Direct)
        } else if let Some(record) = self.scan(&collection, identifier) {
            self.finish(identifier, record, ResolutionSource::FullScan)
        } else if let Some(record) = self.scan(&self.static_dataset, identifier) {
            self.finish(identifier, record, ResolutionSource::StaticFallback)
        } else {
            obs::emit_resolve_finished(identifier, ResolutionSource::NotFound.as_str(), false);
            ResolutionResult::not_found()
        };

        let related = match &resolution.record {
            Some(record) => {
                let mut related =
                    build_related(record, &collection, self.config.related_limit);
                for item in &mut related {
                    normalize_record_media(item, &self.config.origin);
                }
                related
            }
            None => Vec::new(),
        };

        ContentBundle {
            resolution,
            related,
            categories: build_category_counts(&collection),
        }
    }

    /// Walk the published collection through the bounded collector.
    pub async fn collect(&self, cancel: &CancelToken) -> Vec<ContentRecord> {
        self.walk_collection(cancel).await
    }

    async fn try_direct(&self, identifier: &str) -> Option<ContentRecord> {
        match self.source.fetch_by_identifier(identifier).await {
            Ok(found) => found,
            Err(error) => {
                obs::emit_strategy_failed("direct", &error);
                None
            }
        }
    }

    async fn walk_collection(&self, cancel: &CancelToken) -> Vec<ContentRecord> {
        let pages = SourcePages::new(self.source.as_ref(), self.config.page_size);
        self.collector.collect_all(&pages, cancel).await
    }

    /// Linear scan with the identifier matcher. First match in collection
    /// order wins; further matches are a data-quality problem worth
    /// surfacing, not resolving differently.
    fn scan(&self, collection: &[ContentRecord], identifier: &str) -> Option<ContentRecord> {
        let mut first: Option<&ContentRecord> = None;
        let mut matches = 0usize;

        for record in collection {
            if !record.is_addressable() {
                obs::emit_unaddressable_record(&record.title);
                continue;
            }
            if matches_identifier(record, identifier) {
                matches += 1;
                if first.is_none() {
                    first = Some(record);
                }
            }
        }

        if matches > 1 {
            obs::emit_duplicate_matches(identifier, matches);
        }
        first.cloned()
    }

    fn finish(
        &self,
        identifier: &str,
        mut record: ContentRecord,
        source: ResolutionSource,
    ) -> ResolutionResult {
        normalize_record_media(&mut record, &self.config.origin);
        obs::emit_resolve_finished(identifier, source.as_str(), true);
        ResolutionResult {
            record: Some(record),
            source,
        }
    }
}
