//! Client configuration.

use std::time::Duration;

/// Production API root, including the version segment.
pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

/// Upper bound on a single request, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`crate::TrelloClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrelloConfig {
    /// API root without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TrelloConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("trello-card-creator/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl TrelloConfig {
    /// Points the client at a different API root (a mock server in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
