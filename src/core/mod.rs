// src/core/mod.rs - Session list, conversation and banner state

pub mod loader;
pub mod notify;
pub mod state;
pub mod timefmt;
pub mod trigger;
pub mod types;
pub mod viewer;

pub use state::ViewerState;
