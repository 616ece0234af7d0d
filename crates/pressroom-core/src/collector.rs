//! Exhaustive paginated collection walks.
//!
//! Pages are fetched strictly sequentially (page N+1 only after page N
//! resolved), so the aggregated order is deterministic for a given server
//! state: the concatenation of each page's items in page order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::record::ContentRecord;
use crate::obs;
use crate::source::PageFetcher;

/// Cooperative cancellation flag, checked between page fetches.
///
/// Cloning is cheap; all clones observe the same flag. Cancellation yields
/// partial results, never an error.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Walks a paginated collection page-by-page until the server reports no
/// further pages, a page comes back short, or the `max_pages` safety cap
/// is hit.
#[derive(Debug, Clone)]
pub struct PaginatedCollector {
    /// Items requested per page.
    pub page_size: u32,

    /// Hard cap on page requests per walk, so a backend reporting a bogus
    /// `total_pages` cannot drive unbounded fetching.
    pub max_pages: u32,
}

impl PaginatedCollector {
    pub fn new(page_size: u32, max_pages: u32) -> Self {
        Self {
            page_size,
            max_pages,
        }
    }

    /// Walk the collection from page 1 and accumulate every item, in page
    /// order.
    ///
    /// Stop conditions, checked after each page:
    /// - the requested page number reached the server-reported `total_pages`
    /// - the page held fewer items than `page_size` (defensive end marker)
    /// - the next page would exceed `max_pages`
    /// - `cancel` was triggered
    ///
    /// A page fetch failure aborts the walk and returns everything
    /// accumulated so far: partial results are preferable to total failure.
    pub async fn collect_all(
        &self,
        pages: &dyn PageFetcher,
        cancel: &CancelToken,
    ) -> Vec<ContentRecord> {
        let mut collected = Vec::new();
        let mut page = 1u32;

        if self.max_pages == 0 {
            return collected;
        }

        loop {
            if cancel.is_cancelled() {
                obs::emit_walk_truncated(page, "cancelled");
                break;
            }

            let result = match pages.fetch_page(page).await {
                Ok(result) => result,
                Err(error) => {
                    obs::emit_walk_truncated(page, "page_fetch_failed");
                    tracing::warn!(page = page, error = %error, "Page fetch failed, keeping partial results");
                    break;
                }
            };

            let fetched = result.items.len();
            obs::emit_page_fetched(page, fetched);
            collected.extend(result.items);

            if page >= result.total_pages || fetched < self.page_size as usize {
                break;
            }
            if page >= self.max_pages {
                obs::emit_walk_truncated(page, "max_pages");
                break;
            }
            page += 1;
        }

        collected
    }
}
