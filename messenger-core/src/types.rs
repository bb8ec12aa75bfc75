//! Core types: recipient, attachment, outbound message, and the platform wire bodies.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Platform-scoped recipient identifier, serialized as `{ "id": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientRef {
    pub id: String,
}

impl RecipientRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Opaque attachment passed through to the platform unmodified. Only `payload.text` is ever
/// inspected, as a typing-delay fallback source when the message carries no text of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment(pub serde_json::Value);

impl Attachment {
    /// Returns `payload.text` if the attachment carries one.
    pub fn payload_text(&self) -> Option<&str> {
        self.0.get("payload").and_then(|p| p.get("text")).and_then(|t| t.as_str())
    }
}

/// Per-recipient profile attributes, keyed by field name. Sparse; requested fields may be absent.
pub type UserAttributes = HashMap<String, String>;

/// An outbound chatbot message before dispatch. Exactly one of `text` or `attachment` is present
/// at send time. `text` may contain `##fieldname##` placeholders resolved against the recipient's
/// profile when `required_user_fields` names them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_user_fields: Vec<String>,
}

impl OutboundMessage {
    /// Plain text message with no personalization fields.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            attachment: None,
            required_user_fields: Vec::new(),
        }
    }

    /// Attachment-only message.
    pub fn attachment(attachment: Attachment) -> Self {
        Self {
            text: None,
            attachment: Some(attachment),
            required_user_fields: Vec::new(),
        }
    }

    /// The text the typing delay is estimated from: the message text, else the attachment's
    /// `payload.text`. Neither present means a zero delay.
    pub fn delay_source_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .or_else(|| self.attachment.as_ref().and_then(|a| a.payload_text()))
    }
}

/// Presence indicator kinds the platform understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderAction {
    TypingOn,
    TypingOff,
    MarkSeen,
}

/// Content of a message-send body. Text and attachment are mutually exclusive on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text { text: String },
    Attachment { attachment: Attachment },
}

/// A single platform call body: either a presence update (`sender_action`) or a content send
/// (`message`). Serializes to the exact platform JSON shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutgoingBody {
    SenderAction {
        recipient: RecipientRef,
        sender_action: SenderAction,
    },
    Message {
        recipient: RecipientRef,
        message: MessageContent,
    },
}

impl OutgoingBody {
    /// Presence-update body.
    pub fn sender_action(recipient: RecipientRef, sender_action: SenderAction) -> Self {
        Self::SenderAction {
            recipient,
            sender_action,
        }
    }

    /// Text content body.
    pub fn text(recipient: RecipientRef, text: impl Into<String>) -> Self {
        Self::Message {
            recipient,
            message: MessageContent::Text { text: text.into() },
        }
    }

    /// Attachment content body.
    pub fn attachment(recipient: RecipientRef, attachment: Attachment) -> Self {
        Self::Message {
            recipient,
            message: MessageContent::Attachment { attachment },
        }
    }

    /// The text of a content body, if this is a text send.
    pub fn message_text(&self) -> Option<&str> {
        match self {
            Self::Message {
                message: MessageContent::Text { text },
                ..
            } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// **Test: presence body serializes to the platform `sender_action` shape.**
    #[test]
    fn test_sender_action_body_json() {
        let body = OutgoingBody::sender_action(RecipientRef::new("123"), SenderAction::TypingOn);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({ "recipient": { "id": "123" }, "sender_action": "typing_on" })
        );
    }

    /// **Test: text body serializes to the platform `message.text` shape with no attachment key.**
    #[test]
    fn test_text_body_json() {
        let body = OutgoingBody::text(RecipientRef::new("123"), "No bell!");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({ "recipient": { "id": "123" }, "message": { "text": "No bell!" } })
        );
    }

    /// **Test: attachment body carries the attachment unmodified and no text key.**
    #[test]
    fn test_attachment_body_json() {
        let attachment = Attachment(json!({ "type": "template", "payload": { "text": "Hi" } }));
        let body = OutgoingBody::attachment(RecipientRef::new("123"), attachment.clone());
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["message"]["attachment"], attachment.0);
        assert!(value["message"].get("text").is_none());
    }

    /// **Test: delay source text prefers message text, falls back to attachment payload text.**
    #[test]
    fn test_delay_source_text() {
        let text_msg = OutboundMessage::text("Yo Tommy!");
        assert_eq!(text_msg.delay_source_text(), Some("Yo Tommy!"));

        let att_msg = OutboundMessage::attachment(Attachment(json!({
            "payload": { "text": "I'm going on an adventure!" }
        })));
        assert_eq!(
            att_msg.delay_source_text(),
            Some("I'm going on an adventure!")
        );

        let bare = OutboundMessage::attachment(Attachment(json!({ "payload": {} })));
        assert_eq!(bare.delay_source_text(), None);
    }
}
