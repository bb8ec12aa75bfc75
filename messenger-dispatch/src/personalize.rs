//! Message-text personalization: resolves `##field##` placeholders from recipient profile
//! attributes fetched through the platform client.

use messenger_core::{PlatformClient, RecipientRef, UserAttributes};
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves `##field##` placeholders in message text against the recipient's profile.
/// A failed lookup degrades to empty substitutions: a depersonalized message is preferred over
/// no message, so the failure is logged and never surfaced.
pub struct TextPersonalizer {
    client: Arc<dyn PlatformClient>,
}

impl TextPersonalizer {
    pub fn new(client: Arc<dyn PlatformClient>) -> Self {
        Self { client }
    }

    /// Returns `text` with every `##field##` occurrence of the requested fields replaced by the
    /// recipient's attribute value. Empty `required_fields` short-circuits with no platform call.
    pub async fn personalize(
        &self,
        text: &str,
        required_fields: &[String],
        recipient: &RecipientRef,
    ) -> String {
        if required_fields.is_empty() {
            return text.to_string();
        }

        let attributes = match self.client.get_user_info(&recipient.id, required_fields).await {
            Ok(attributes) => attributes,
            Err(e) => {
                warn!(
                    recipient_id = %recipient.id,
                    error = %e,
                    "user info lookup failed, sending depersonalized text"
                );
                UserAttributes::new()
            }
        };
        let resolved = substitute(text, required_fields, &attributes);
        debug!(recipient_id = %recipient.id, fields = required_fields.len(), "text personalized");
        resolved
    }
}

/// Replaces each requested `##field##` with its attribute value. Missing fields substitute the
/// empty string; an empty substitution also consumes one space immediately before the
/// placeholder, so "Hi ##first_name##!" degrades to "Hi!" rather than "Hi !". Placeholders for
/// fields that were not requested are left untouched.
fn substitute(text: &str, required_fields: &[String], attributes: &UserAttributes) -> String {
    let mut resolved = text.to_string();
    for field in required_fields {
        let placeholder = format!("##{}##", field);
        let value = attributes.get(field).map(String::as_str).unwrap_or("");
        if value.is_empty() {
            let padded = format!(" {}", placeholder);
            resolved = resolved.replace(&padded, "");
            resolved = resolved.replace(&placeholder, "");
        } else {
            resolved = resolved.replace(&placeholder, value);
        }
    }
    resolved
}
