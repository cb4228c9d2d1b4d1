// src/tui/widgets/mod.rs - Panes and overlays.

pub mod banner;
pub mod conversation;
pub mod sessions;
