//! Platform abstraction for outbound calls.
//!
//! [`PlatformClient`] is transport-agnostic; messenger-graph implements it against the Graph API
//! and tests substitute recording doubles.

use crate::error::Result;
use crate::types::{OutgoingBody, UserAttributes};
use async_trait::async_trait;

/// Abstraction over the messaging platform's outbound surface. Implementations must be
/// stateless/reentrant: one shared client serves many concurrent dispatch calls.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Sends one body — a presence update or a content message — to the platform.
    async fn send_message(&self, body: &OutgoingBody) -> Result<()>;

    /// Fetches the named profile fields for a recipient. The returned mapping is sparse and may
    /// omit requested fields.
    async fn get_user_info(
        &self,
        recipient_id: &str,
        required_fields: &[String],
    ) -> Result<UserAttributes>;
}
