//! Fetcher configuration

use serde::{Deserialize, Serialize};

/// Configuration for fetching provider documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent for web requests
    pub user_agent: String,

    /// Sent as `Accept-Language`; some vendors localize numerals by it
    pub accept_language: String,

    /// Maximum redirects to follow
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!(
                "Mozilla/5.0 (compatible; Eldsneyti/{}; +https://github.com/eldsneyti/eldsneyti)",
                env!("CARGO_PKG_VERSION")
            ),
            accept_language: "en-US,en;q=0.8,is;q=0.6".to_string(),
            max_redirects: 5,
        }
    }
}

impl FetchConfig {
    /// Create a new config with custom timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Create a new config with custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = accept_language.into();
        self
    }
}
