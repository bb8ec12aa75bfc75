//! Minimal adapter config: page access token, API base URL, log path.
//! Loaded from the environment: PAGE_ACCESS_TOKEN, GRAPH_API_URL, LOG_FILE.

use anyhow::Result;
use std::env;

/// Graph API adapter configuration (platform access and logging only).
pub struct GraphConfig {
    pub page_access_token: String,
    pub graph_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl GraphConfig {
    /// Loads from environment variables: PAGE_ACCESS_TOKEN is required, GRAPH_API_URL and
    /// LOG_FILE are optional.
    pub fn from_env() -> Result<Self> {
        let page_access_token = env::var("PAGE_ACCESS_TOKEN")
            .map_err(|_| anyhow::anyhow!("PAGE_ACCESS_TOKEN not set"))?;
        let graph_api_url = env::var("GRAPH_API_URL").ok();
        let log_file = env::var("LOG_FILE").ok();
        Ok(Self {
            page_access_token,
            graph_api_url,
            log_file,
        })
    }

    /// Builds a config with the given token, everything else unset.
    pub fn with_token(page_access_token: String) -> Self {
        Self {
            page_access_token,
            graph_api_url: None,
            log_file: None,
        }
    }
}
