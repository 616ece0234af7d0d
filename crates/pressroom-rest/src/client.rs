//! REST content source.
//!
//! Implements the engine's `ContentSource` seam against the JSON
//! endpoints `GET /posts/:identifier` and
//! `GET /posts?page=&limit=&status=`.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pressroom_core::{ContentRecord, ContentSource, PageResult, SourceResult};

use crate::error::RestError;
use crate::wire::{ListEnvelope, PostEnvelope};

/// REST source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestConfig {
    /// Base API URL, e.g. `http://localhost:5000/api`
    pub base_url: String,

    /// Status filter sent with list requests. `None` lists every status.
    pub status_filter: Option<String>,
}

impl Default for RestConfig {
    fn default() -> Self {
        RestConfig {
            base_url: std::env::var("PRESSROOM_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000/api".to_string()),
            status_filter: Some("published".to_string()),
        }
    }
}

impl RestConfig {
    /// Create a config from environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create config for a specific backend
    pub fn new(base_url: &str) -> Self {
        RestConfig {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Replace the list status filter
    pub fn with_status_filter(mut self, status: &str) -> Self {
        self.status_filter = Some(status.to_string());
        self
    }

    /// List every status, drafts and archives included
    pub fn without_status_filter(mut self) -> Self {
        self.status_filter = None;
        self
    }
}

/// `ContentSource` backed by the JSON REST API.
pub struct RestContentSource {
    config: RestConfig,
    http_client: reqwest::Client,
}

impl RestContentSource {
    /// Create a new REST source
    pub fn new(config: RestConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("pressroom/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        RestContentSource {
            config,
            http_client,
        }
    }

    /// Create a source from environment variables
    pub fn from_env() -> Self {
        Self::new(RestConfig::from_env())
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ContentSource for RestContentSource {
    async fn fetch_by_identifier(
        &self,
        identifier: &str,
    ) -> SourceResult<Option<ContentRecord>> {
        let url = format!("{}/{}", self.posts_url(), identifier);
        debug!(url = %url, "Fetching record directly");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(RestError::from)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(RestError::Status(response.status().as_u16()).into());
        }

        let envelope: PostEnvelope = response.json().await.map_err(RestError::from)?;
        let record = envelope.into_inner().into_record()?;
        Ok(Some(record))
    }

    async fn fetch_page(&self, page: u32, page_size: u32) -> SourceResult<PageResult> {
        let mut request = self
            .http_client
            .get(self.posts_url())
            .query(&[("page", page.to_string()), ("limit", page_size.to_string())]);
        if let Some(status) = &self.config.status_filter {
            request = request.query(&[("status", status.as_str())]);
        }
        debug!(page = page, limit = page_size, "Fetching collection page");

        let response = request.send().await.map_err(RestError::from)?;
        if !response.status().is_success() {
            return Err(RestError::Status(response.status().as_u16()).into());
        }

        let envelope: ListEnvelope = response.json().await.map_err(RestError::from)?;
        Ok(envelope.into_page_result(page)?)
    }
}
