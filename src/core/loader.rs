// src/core/loader.rs - Incremental session list pagination
//
// Pages are appended in arrival order. Each batch is sorted on its own;
// the accumulated list is never re-sorted or de-duplicated.

use crate::core::types::{sort_by_recent_activity, Session, SessionPage};
use crate::infra::errors::Result;
use crate::source::SessionSource;

/// Accumulated session list plus pagination cursor.
#[derive(Debug, Clone)]
pub struct SessionLoader {
    sessions: Vec<Session>,
    /// Next page to request (1-based).
    cursor: u32,
    /// Total page count reported by the last successful response.
    total_pages: Option<u32>,
    loading: bool,
    /// Pages that succeeded so far.
    loaded_pages: u32,
}

impl Default for SessionLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionLoader {
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            cursor: 1,
            total_pages: None,
            loading: false,
            loaded_pages: 0,
        }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn next_page(&self) -> u32 {
        self.cursor
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn loaded_pages(&self) -> u32 {
        self.loaded_pages
    }

    /// Whether another page is known to exist. An unknown total counts as
    /// exhausted.
    pub fn has_more(&self) -> bool {
        self.total_pages.is_some_and(|total| self.cursor <= total)
    }

    pub fn find(&self, id: i64) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Mark a fetch of `page` as in flight. The flag is advisory: a second
    /// call while loading is allowed and logged.
    pub fn begin(&mut self, page: u32) -> u32 {
        if self.loading {
            tracing::debug!(page, "page load requested while another is in flight");
        }
        self.loading = true;
        page
    }

    /// Apply the outcome of a fetch. Clears the loading flag on every path.
    pub fn finish(&mut self, result: Result<SessionPage>) -> Result<usize> {
        self.loading = false;
        let page = result?;
        Ok(self.merge(page))
    }

    /// Fetch `page` from `source` and merge it.
    pub async fn load_page(&mut self, source: &dyn SessionSource, page: u32) -> Result<usize> {
        let page = self.begin(page);
        let result = source.fetch_page(page).await;
        self.finish(result)
    }

    fn merge(&mut self, page: SessionPage) -> usize {
        let total = page.known_total_pages();
        let mut batch = page.chat_sessions;
        sort_by_recent_activity(&mut batch);

        let added = batch.len();
        self.sessions.extend(batch);
        self.total_pages = total;
        self.cursor += 1;
        self.loaded_pages += 1;

        tracing::info!(
            added,
            total_sessions = self.sessions.len(),
            next_page = self.cursor,
            total_pages = ?self.total_pages,
            "merged session page"
        );
        added
    }
}
