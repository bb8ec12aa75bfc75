//! Presence signals: mark_seen and the typing indicator with its simulated typing wait.

use crate::delay::estimate_delay;
use messenger_core::{
    MessengerError, OutboundMessage, OutgoingBody, PlatformClient, RecipientRef, Result,
    SenderAction,
};
use std::sync::Arc;
use tracing::debug;

/// Sends presence updates to the platform. `signal_typing_then_wait` holds the typing indicator
/// up for the estimated typing duration before resolving, so the content message lands with a
/// human-feeling pause.
pub struct PresenceNotifier {
    client: Arc<dyn PlatformClient>,
}

impl PresenceNotifier {
    pub fn new(client: Arc<dyn PlatformClient>) -> Self {
        Self { client }
    }

    /// Sends a single `mark_seen` presence update. No delay.
    pub async fn mark_seen(&self, recipient: &RecipientRef) -> Result<()> {
        let body = OutgoingBody::sender_action(recipient.clone(), SenderAction::MarkSeen);
        self.client
            .send_message(&body)
            .await
            .map_err(|e| MessengerError::Presence(e.to_string()))
    }

    /// Sends `typing_on`, then sleeps for the delay estimated from the message text (or the
    /// attachment's `payload.text` when the message has none). A failed presence call propagates
    /// immediately; the wait is never entered. The sleep is non-blocking: concurrent dispatch
    /// calls keep progressing.
    pub async fn signal_typing_then_wait(
        &self,
        recipient: &RecipientRef,
        message: &OutboundMessage,
    ) -> Result<()> {
        let body = OutgoingBody::sender_action(recipient.clone(), SenderAction::TypingOn);
        self.client
            .send_message(&body)
            .await
            .map_err(|e| MessengerError::Presence(e.to_string()))?;

        let delay = estimate_delay(message.delay_source_text().unwrap_or(""));
        debug!(
            recipient_id = %recipient.id,
            delay_ms = delay.as_millis() as u64,
            "typing indicator on, waiting out typing delay"
        );
        tokio::time::sleep(delay).await;
        Ok(())
    }
}
