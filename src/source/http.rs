// src/source/http.rs - Session source backed by the REST collection endpoint
//
// GET <url>?page=<n>&per_page=<size> -> { chat_sessions, total_pages }

use async_trait::async_trait;
use reqwest::Client;

use crate::core::types::SessionPage;
use crate::infra::config::SourceConfig;
use crate::infra::errors::ChatdeckError;

use super::SessionSource;

pub struct HttpSessionSource {
    client: Client,
    url: String,
    per_page: u32,
}

impl HttpSessionSource {
    pub fn new(config: &SourceConfig) -> Result<Self, ChatdeckError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("chatdeck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
            per_page: config.per_page,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SessionSource for HttpSessionSource {
    fn id(&self) -> &str {
        "http"
    }

    fn per_page(&self) -> u32 {
        self.per_page
    }

    async fn fetch_page(&self, page: u32) -> Result<SessionPage, ChatdeckError> {
        tracing::debug!(page, per_page = self.per_page, url = %self.url, "fetching session page");

        let resp = self
            .client
            .get(&self.url)
            .query(&[("page", page), ("per_page", self.per_page)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ChatdeckError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let parsed: SessionPage = serde_json::from_str(&body)?;
        tracing::debug!(
            page,
            sessions = parsed.chat_sessions.len(),
            total_pages = ?parsed.total_pages,
            "session page received"
        );
        Ok(parsed)
    }
}
