// src/lib.rs - Library root for chatdeck

pub mod cli;
pub mod core;
pub mod infra;
pub mod source;
pub mod tui;
