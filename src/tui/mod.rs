// src/tui/mod.rs - Terminal viewer.
//
// Session list on the left, conversation on the right; a single pane at a
// time on narrow terminals. Launched by running `chatdeck` without a
// subcommand.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::run_viewer;
