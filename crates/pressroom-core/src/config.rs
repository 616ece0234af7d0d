//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Immutable per-call configuration for the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Origin (scheme + host) media URLs are normalized against.
    pub origin: String,

    /// Items requested per page during a collection walk.
    pub page_size: u32,

    /// Hard cap on page requests per walk. Guards against a backend that
    /// never reports a sane `total_pages`.
    pub max_pages: u32,

    /// Maximum size of a related-items set.
    pub related_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            origin: std::env::var("PRESSROOM_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            page_size: env_number("PRESSROOM_PAGE_SIZE", 100),
            max_pages: env_number("PRESSROOM_MAX_PAGES", 20),
            related_limit: env_number("PRESSROOM_RELATED_LIMIT", 3),
        }
    }
}

impl EngineConfig {
    /// Create a config from environment variables.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create a config for a specific origin.
    pub fn new(origin: &str) -> Self {
        EngineConfig {
            origin: origin.to_string(),
            ..Self::from_env()
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_related_limit(mut self, related_limit: usize) -> Self {
        self.related_limit = related_limit;
        self
    }
}

fn env_number<T: std::str::FromStr + Copy>(key: &str, fallback: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(fallback)
}
