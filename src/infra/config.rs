// src/infra/config.rs - Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::infra::errors::{ChatdeckError, Result};
use crate::infra::paths;

pub const DEFAULT_SOURCE_URL: &str = "http://127.0.0.1:8000/nlp/api/chat_sessions";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Collection endpoint; `page` and `per_page` are appended as query params.
    pub url: String,
    pub per_page: u32,
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.into(),
            per_page: 20,
            timeout_seconds: 30,
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long the notification banner stays up.
    pub notification_seconds: u64,
    /// Event poll interval of the TUI loop.
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_seconds: 3,
            tick_ms: 250,
        }
    }
}

impl UiConfig {
    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_seconds)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ChatdeckError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply a command-line endpoint override and re-validate.
    pub fn with_url(mut self, url: Option<String>) -> Result<Self> {
        if let Some(url) = url {
            self.source.url = url;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.source.url).map_err(|e| ChatdeckError::InvalidUrl {
            url: self.source.url.clone(),
            message: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ChatdeckError::InvalidUrl {
                url: self.source.url.clone(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        if self.source.per_page == 0 {
            return Err(ChatdeckError::Config("source.per_page must be positive".into()));
        }
        if self.ui.tick_ms == 0 {
            return Err(ChatdeckError::Config("ui.tick_ms must be positive".into()));
        }
        Ok(())
    }
}
