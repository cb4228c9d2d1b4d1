// src/core/notify.rs - Transient notification banner

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerKind {
    #[default]
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub kind: BannerKind,
    shown_at: Instant,
}

/// Shows one message at a time and hides it after a fixed duration.
#[derive(Debug, Clone)]
pub struct Notifier {
    current: Option<Banner>,
    duration: Duration,
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.show_at(message, BannerKind::Info, Instant::now());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.show_at(message, BannerKind::Warning, Instant::now());
    }

    /// Replaces any visible banner and restarts the countdown.
    pub fn show_at(&mut self, message: impl Into<String>, kind: BannerKind, now: Instant) {
        self.current = Some(Banner {
            message: message.into(),
            kind,
            shown_at: now,
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Hide the banner once its duration has elapsed.
    pub fn tick(&mut self, now: Instant) {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|b| now.saturating_duration_since(b.shown_at) >= self.duration);
        if expired {
            self.current = None;
        }
    }

    pub fn visible(&self) -> Option<&Banner> {
        self.current.as_ref()
    }
}
