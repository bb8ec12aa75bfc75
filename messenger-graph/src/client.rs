//! Graph API platform client: Send API posts and User Profile lookups over reqwest.

use async_trait::async_trait;
use messenger_core::{MessengerError, OutgoingBody, PlatformClient, Result, UserAttributes};
use tracing::debug;

const GRAPH_API_BASE: &str = "https://graph.facebook.com/v19.0";

/// Reqwest-backed [`PlatformClient`] for the Graph API. Stateless and reentrant; one shared
/// instance serves all concurrent dispatch calls.
pub struct GraphClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl GraphClient {
    /// Creates a client for the production Graph API base URL.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(access_token, GRAPH_API_BASE)
    }

    /// Creates a client against a custom base URL (tests or alternate API versions).
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Creates a client from config: GRAPH_API_URL override when set, production base otherwise.
    pub fn from_config(config: &crate::GraphConfig) -> Self {
        match &config.graph_api_url {
            Some(url) => Self::with_base_url(config.page_access_token.clone(), url.clone()),
            None => Self::new(config.page_access_token.clone()),
        }
    }
}

#[async_trait]
impl PlatformClient for GraphClient {
    async fn send_message(&self, body: &OutgoingBody) -> Result<()> {
        let url = format!(
            "{}/me/messages?access_token={}",
            self.base_url, self.access_token
        );
        let res = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| MessengerError::Platform(e.to_string()))?;
        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(MessengerError::Platform(format!(
                "send failed: {} {}",
                status, text
            )));
        }
        debug!("message posted to Send API");
        Ok(())
    }

    async fn get_user_info(
        &self,
        recipient_id: &str,
        required_fields: &[String],
    ) -> Result<UserAttributes> {
        let url = format!(
            "{}/{}?fields={}&access_token={}",
            self.base_url,
            recipient_id,
            required_fields.join(","),
            self.access_token
        );
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| MessengerError::Platform(e.to_string()))?;
        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(MessengerError::Platform(format!(
                "user info lookup failed: {} {}",
                status, text
            )));
        }
        let profile: serde_json::Value = res
            .json()
            .await
            .map_err(|e| MessengerError::Platform(e.to_string()))?;
        // The profile response carries extra keys (e.g. "id"); keep only string values, the
        // substitution layer ignores fields it did not request.
        let attributes = profile
            .as_object()
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default();
        Ok(attributes)
    }
}
