// src/source/mod.rs - Session source layer

pub mod http;

use async_trait::async_trait;

use crate::core::types::SessionPage;
use crate::infra::errors::ChatdeckError;

pub use http::HttpSessionSource;

/// Anything that can serve pages of the session collection.
///
/// Pages are 1-based. The page size is fixed per source.
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Short identifier used in logs.
    fn id(&self) -> &str;

    fn per_page(&self) -> u32;

    async fn fetch_page(&self, page: u32) -> Result<SessionPage, ChatdeckError>;
}
