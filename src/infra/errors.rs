// src/infra/errors.rs - Error types for chatdeck

use thiserror::Error;

/// Message shown to the user for every failed page load, whatever the cause.
pub const LOAD_FAILURE_MESSAGE: &str = "Unable to fetch sessions. Please try again.";

#[derive(Error, Debug)]
pub enum ChatdeckError {
    // Fetch errors (all surface as a load failure)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Session endpoint returned {status}")]
    Status { status: u16 },

    #[error("Malformed session page: {0}")]
    Decode(#[from] serde_json::Error),

    // Setup
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid session endpoint '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChatdeckError {
    /// Whether this error came from fetching a page (and so is a load failure).
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            ChatdeckError::Http(_) | ChatdeckError::Status { .. } | ChatdeckError::Decode(_)
        )
    }

    /// The text shown in the notification banner.
    pub fn user_message(&self) -> String {
        if self.is_load_failure() {
            LOAD_FAILURE_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

pub type Result<T> = std::result::Result<T, ChatdeckError>;
