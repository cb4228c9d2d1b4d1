// src/tui/theme.rs - Color scheme and style definitions for the viewer.

use ratatui::style::{Color, Modifier, Style};

use crate::core::notify::BannerKind;
use crate::core::types::Sender;

pub struct Theme;

impl Theme {
    // ── Palette ─────────────────────────────────────────────────
    pub const ACCENT: Color = Color::Rgb(59, 130, 246);
    pub const WHITE: Color = Color::Rgb(240, 240, 240);
    pub const NAVY: Color = Color::Rgb(46, 59, 91);
    pub const MIDNIGHT: Color = Color::Rgb(0, 9, 41);
    pub const ORANGE: Color = Color::Rgb(255, 165, 0);
    pub const BLACK: Color = Color::Rgb(10, 10, 10);
    pub const GRAY: Color = Color::Rgb(120, 120, 140);
    pub const DIM: Color = Color::Rgb(80, 80, 100);
    pub const SELECTED_BG: Color = Color::Rgb(40, 60, 110);

    // ── Semantic styles ─────────────────────────────────────────

    /// Main title / header bar.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Theme::DIM)
    }

    /// Border of the pane that has focus.
    pub fn border_focus() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    pub fn text_dim() -> Style {
        Style::default().fg(Theme::GRAY)
    }

    /// Session name in the list.
    pub fn session_name() -> Style {
        Style::default()
            .fg(Theme::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted session row.
    pub fn row_selected() -> Style {
        Style::default().bg(Theme::SELECTED_BG).fg(Theme::WHITE)
    }

    /// Session currently open in the conversation pane.
    pub fn row_active() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    /// Message bubble for a sender.
    pub fn bubble(sender: Sender) -> Style {
        match sender {
            Sender::User => Style::default().bg(Theme::NAVY).fg(Theme::WHITE),
            Sender::Ai => Style::default().bg(Theme::MIDNIGHT).fg(Theme::WHITE),
        }
    }

    pub fn banner(kind: BannerKind) -> Style {
        match kind {
            BannerKind::Info => Style::default().bg(Theme::BLACK).fg(Theme::WHITE),
            BannerKind::Warning => Style::default().bg(Theme::ORANGE).fg(Theme::BLACK),
        }
    }

    /// "Load more" affordance at the bottom of the list.
    pub fn load_more() -> Style {
        Style::default()
            .fg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    pub fn key_desc() -> Style {
        Style::default().fg(Theme::GRAY)
    }
}
