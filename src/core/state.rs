// src/core/state.rs - Top-level viewer controller
//
// Owns every piece of mutable UI state. The front end feeds it intents and
// fetch results; methods that need a page fetched return the page number and
// the front end performs the fetch.

use std::time::{Duration, Instant};

use crate::core::loader::SessionLoader;
use crate::core::notify::Notifier;
use crate::core::trigger::ContinuationTrigger;
use crate::core::types::{Session, SessionPage};
use crate::core::viewer::ConversationViewer;
use crate::infra::errors::ChatdeckError;

pub const NO_MORE_SESSIONS: &str = "No more sessions to load.";

#[derive(Debug, Clone)]
pub struct ViewerState {
    pub loader: SessionLoader,
    pub viewer: ConversationViewer,
    pub trigger: ContinuationTrigger,
    pub notifier: Notifier,
    /// Highlighted row in the session list.
    highlighted: Option<usize>,
    started: bool,
}

impl ViewerState {
    pub fn new(banner_duration: Duration) -> Self {
        Self {
            loader: SessionLoader::new(),
            viewer: ConversationViewer::new(),
            trigger: ContinuationTrigger::new(),
            notifier: Notifier::new(banner_duration),
            highlighted: None,
            started: false,
        }
    }

    pub fn sessions(&self) -> &[Session] {
        self.loader.sessions()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn active_session(&self) -> Option<&Session> {
        self.viewer
            .active_session_id()
            .and_then(|id| self.loader.find(id))
    }

    /// First load on start-up. Only returns a page the first time.
    pub fn start(&mut self) -> Option<u32> {
        if self.started {
            return None;
        }
        self.started = true;
        Some(self.loader.begin(1))
    }

    /// Explicit "load more". Once the known pages are exhausted it only
    /// tells the user so.
    pub fn request_more(&mut self) -> Option<u32> {
        if !self.loader.has_more() {
            self.notifier.show(NO_MORE_SESSIONS);
            return None;
        }
        let page = self.loader.next_page();
        Some(self.loader.begin(page))
    }

    /// Visibility signal from the list: `true` when the last row is on screen.
    pub fn on_last_row_visible(&mut self, visible: bool) -> Option<u32> {
        if !self.loader.has_more() {
            self.trigger.disarm();
            return None;
        }
        self.rearm_trigger();
        if self.trigger.observe(visible) {
            let page = self.loader.next_page();
            tracing::debug!(page, "end of list reached, loading next page");
            return Some(self.loader.begin(page));
        }
        None
    }

    /// Apply a fetch outcome. Failures go to the banner as a warning.
    pub fn apply_load(&mut self, result: Result<SessionPage, ChatdeckError>) {
        match self.loader.finish(result) {
            Ok(_) => {
                if self.highlighted.is_none() && !self.loader.sessions().is_empty() {
                    self.highlighted = Some(0);
                }
                self.rearm_trigger();
            }
            Err(e) => {
                tracing::warn!("session page load failed: {e}");
                self.notifier.warn(e.user_message());
            }
        }
    }

    fn rearm_trigger(&mut self) {
        self.trigger
            .register(self.loader.sessions().len(), self.loader.next_page());
    }

    /// Move the highlight by `delta` rows, clamped to the list.
    pub fn move_highlight(&mut self, delta: isize) {
        let len = self.loader.sessions().len();
        if len == 0 {
            self.highlighted = None;
            return;
        }
        let current = self.highlighted.unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.highlighted = Some(next as usize);
    }

    /// Open the highlighted session in the conversation pane.
    pub fn open_highlighted(&mut self) -> bool {
        let Some(id) = self
            .highlighted
            .and_then(|i| self.loader.sessions().get(i))
            .map(|s| s.id)
        else {
            return false;
        };
        self.select_session(id)
    }

    pub fn select_session(&mut self, id: i64) -> bool {
        self.viewer.select_session(self.loader.sessions(), id)
    }

    pub fn back(&mut self) {
        self.viewer.back();
    }

    pub fn dismiss_banner(&mut self) {
        self.notifier.dismiss();
    }

    pub fn tick(&mut self, now: Instant) {
        self.notifier.tick(now);
    }
}
