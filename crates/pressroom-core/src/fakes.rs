//! In-memory fakes for the source traits (testing only)
//!
//! Provides `MemorySource` and `ScriptedPages` that satisfy the trait
//! contracts without any transport, plus request counters so tests can
//! assert how many fetches a pipeline actually issued.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::identifier::matches_identifier;
use crate::domain::record::{ContentRecord, PageResult};
use crate::error::{SourceError, SourceResult};
use crate::source::{ContentSource, PageFetcher};

// ---------------------------------------------------------------------------
// MemorySource
// ---------------------------------------------------------------------------

/// In-memory content source backed by a `Vec<ContentRecord>`.
///
/// Pages are slices of the record list in insertion order. Individual
/// pages and the direct-fetch endpoint can be scripted to fail, which lets
/// tests drive every branch of the fallback chain.
#[derive(Debug, Default)]
pub struct MemorySource {
    records: Vec<ContentRecord>,
    fail_direct: bool,
    failing_pages: HashSet<u32>,
    direct_requests: Mutex<Vec<String>>,
    page_requests: Mutex<Vec<u32>>,
}

impl MemorySource {
    pub fn new(records: Vec<ContentRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Make every `fetch_by_identifier` call fail with a transport error.
    pub fn failing_direct(mut self) -> Self {
        self.fail_direct = true;
        self
    }

    /// Make fetches of the given page fail with a transport error.
    pub fn failing_page(mut self, page: u32) -> Self {
        self.failing_pages.insert(page);
        self
    }

    /// Identifiers passed to `fetch_by_identifier` so far.
    pub fn direct_requests(&self) -> Vec<String> {
        self.direct_requests.lock().unwrap().clone()
    }

    /// Page numbers requested so far, in request order.
    pub fn page_requests(&self) -> Vec<u32> {
        self.page_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn fetch_by_identifier(
        &self,
        identifier: &str,
    ) -> SourceResult<Option<ContentRecord>> {
        self.direct_requests
            .lock()
            .unwrap()
            .push(identifier.to_string());
        if self.fail_direct {
            return Err(SourceError::Transport("scripted direct failure".into()));
        }
        Ok(self
            .records
            .iter()
            .find(|record| matches_identifier(record, identifier))
            .cloned())
    }

    async fn fetch_page(&self, page: u32, page_size: u32) -> SourceResult<PageResult> {
        self.page_requests.lock().unwrap().push(page);
        if self.failing_pages.contains(&page) {
            return Err(SourceError::Transport(format!(
                "scripted failure on page {page}"
            )));
        }
        if page == 0 || page_size == 0 {
            return Err(SourceError::Decode("page and page_size are 1-based".into()));
        }

        let size = page_size as usize;
        let start = (page as usize - 1) * size;
        let items: Vec<ContentRecord> = self
            .records
            .iter()
            .skip(start)
            .take(size)
            .cloned()
            .collect();
        let total_pages = (self.records.len().div_ceil(size)).max(1) as u32;

        Ok(PageResult {
            items,
            page,
            total_pages,
        })
    }
}

// ---------------------------------------------------------------------------
// ScriptedPages
// ---------------------------------------------------------------------------

/// One scripted response for a page fetch.
#[derive(Debug, Clone)]
pub enum ScriptedPage {
    Ok(PageResult),
    Fail,
}

/// A page fetcher that replays a fixed script, one entry per page number.
///
/// Requests beyond the script fail, which terminates a walk the same way a
/// transport error would. Useful for lying-server scenarios (bogus
/// `total_pages`) that `MemorySource` cannot express.
#[derive(Debug, Default)]
pub struct ScriptedPages {
    script: Vec<ScriptedPage>,
    requests: Mutex<Vec<u32>>,
}

impl ScriptedPages {
    pub fn new(script: Vec<ScriptedPage>) -> Self {
        Self {
            script,
            ..Self::default()
        }
    }

    /// Page numbers requested so far, in request order.
    pub fn requests(&self) -> Vec<u32> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for ScriptedPages {
    async fn fetch_page(&self, page: u32) -> SourceResult<PageResult> {
        self.requests.lock().unwrap().push(page);
        match self.script.get(page as usize - 1) {
            Some(ScriptedPage::Ok(result)) => Ok(result.clone()),
            Some(ScriptedPage::Fail) => {
                Err(SourceError::Transport(format!("scripted failure on page {page}")))
            }
            None => Err(SourceError::Transport(format!("page {page} beyond script"))),
        }
    }
}
