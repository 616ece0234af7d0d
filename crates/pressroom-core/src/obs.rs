//! Structured observability hooks for resolution lifecycle events.
//!
//! This module provides:
//! - Resolution-scoped tracing spans via the `ResolveSpan` RAII guard
//! - Emission functions for key lifecycle events: resolution start/finish,
//!   page fetches, walk truncation, data-quality warnings
//!
//! Events are emitted at `info!`/`warn!` level; filter via `RUST_LOG`.

use tracing::{info, warn};

/// RAII guard that enters a resolution-scoped tracing span.
///
/// # Example
///
/// ```ignore
/// let _span = ResolveSpan::enter("future-scope-of-sap");
/// // All tracing calls are now associated with identifier = "future-scope-of-sap"
/// ```
pub struct ResolveSpan {
    _span: tracing::span::EnteredSpan,
}

impl ResolveSpan {
    /// Create and enter a span tagged with the requested identifier.
    pub fn enter(identifier: &str) -> Self {
        let span = tracing::info_span!("pressroom.resolve", identifier = %identifier);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: resolution started.
pub fn emit_resolve_started(identifier: &str) {
    info!(event = "resolve.started", identifier = %identifier);
}

/// Emit event: resolution finished, with the winning strategy.
pub fn emit_resolve_finished(identifier: &str, source: &str, found: bool) {
    info!(
        event = "resolve.finished",
        identifier = %identifier,
        source = %source,
        found = found,
    );
}

/// Emit event: a strategy failed and the chain fell through (warning level).
pub fn emit_strategy_failed(strategy: &str, error: &dyn std::fmt::Display) {
    warn!(event = "resolve.strategy_failed", strategy = %strategy, error = %error);
}

/// Emit event: one page of a collection walk fetched.
pub fn emit_page_fetched(page: u32, items: usize) {
    info!(event = "walk.page_fetched", page = page, items = items);
}

/// Emit event: a collection walk stopped before the server-reported end.
pub fn emit_walk_truncated(page: u32, reason: &str) {
    warn!(event = "walk.truncated", page = page, reason = %reason);
}

/// Emit event: multiple records matched one identifier (warning level).
///
/// Duplicate slugs are a write-time data-quality problem; the engine keeps
/// first-match-wins behavior but makes the ambiguity visible.
pub fn emit_duplicate_matches(identifier: &str, matches: usize) {
    warn!(
        event = "resolve.duplicate_matches",
        identifier = %identifier,
        matches = matches,
    );
}

/// Emit event: a record without slug or id was encountered (warning level).
pub fn emit_unaddressable_record(title: &str) {
    warn!(event = "scan.unaddressable_record", title = %title);
}
