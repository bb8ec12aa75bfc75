//! The message dispatcher: one strictly ordered outbound pipeline per call.

use crate::personalize::TextPersonalizer;
use crate::presence::PresenceNotifier;
use messenger_core::{
    MessengerError, OutboundMessage, OutgoingBody, PlatformClient, RecipientRef, Result,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Orchestrates one outbound send: personalize the text, signal typing and wait out the
/// simulated delay, then deliver the content body. Stateless; every call is an independent
/// linear pipeline with no retries.
pub struct MessageDispatcher {
    client: Arc<dyn PlatformClient>,
    personalizer: TextPersonalizer,
    presence: PresenceNotifier,
}

impl MessageDispatcher {
    pub fn new(client: Arc<dyn PlatformClient>) -> Self {
        Self {
            personalizer: TextPersonalizer::new(client.clone()),
            presence: PresenceNotifier::new(client.clone()),
            client,
        }
    }

    /// Sends one message. Steps run strictly in order, each completing before the next begins:
    /// personalization (lookup failures absorbed), typing signal plus delay (failure aborts the
    /// call), then the content send (result propagated as-is). The platform observes the
    /// presence signal before the content message.
    #[instrument(skip(self, message))]
    pub async fn send_message(
        &self,
        recipient: &RecipientRef,
        message: &OutboundMessage,
    ) -> Result<()> {
        info!(recipient_id = %recipient.id, "step: dispatch started");

        let resolved_text = match &message.text {
            Some(text) if !message.required_user_fields.is_empty() => Some(
                self.personalizer
                    .personalize(text, &message.required_user_fields, recipient)
                    .await,
            ),
            Some(text) => Some(text.clone()),
            None => None,
        };

        // The presence view carries the resolved text so the typing delay matches what is sent.
        let view = OutboundMessage {
            text: resolved_text.clone(),
            attachment: message.attachment.clone(),
            required_user_fields: Vec::new(),
        };
        self.presence.signal_typing_then_wait(recipient, &view).await?;
        info!(recipient_id = %recipient.id, "step: typing signaled and delay elapsed");

        let body = match (resolved_text, &message.attachment) {
            (Some(text), _) => OutgoingBody::text(recipient.clone(), text),
            (None, Some(attachment)) => {
                OutgoingBody::attachment(recipient.clone(), attachment.clone())
            }
            (None, None) => {
                return Err(MessengerError::Send(
                    "message has neither text nor attachment".to_string(),
                ))
            }
        };

        self.client
            .send_message(&body)
            .await
            .map_err(|e| MessengerError::Send(e.to_string()))?;
        info!(recipient_id = %recipient.id, "step: dispatch finished");
        Ok(())
    }

    /// Marks the conversation as seen. Independent of the send pipeline; typically issued when
    /// an inbound message arrives, before any reply is dispatched.
    pub async fn mark_seen(&self, recipient: &RecipientRef) -> Result<()> {
        self.presence.mark_seen(recipient).await
    }
}
