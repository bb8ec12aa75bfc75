//! Mock implementation of [`messenger_core::PlatformClient`] for integration tests.
//!
//! Records every platform call in arrival order so tests can assert on call counts, call
//! ordering (presence before content), and the exact bodies sent, without hitting the network.
//! Failures are scripted per call kind.

use async_trait::async_trait;
use messenger_core::{
    MessengerError, OutgoingBody, PlatformClient, Result, UserAttributes,
};
use std::sync::Mutex;

/// One recorded platform call.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    Send(OutgoingBody),
    UserInfo {
        recipient_id: String,
        fields: Vec<String>,
    },
}

enum UserInfoBehavior {
    Respond(UserAttributes),
    Fail,
}

/// Mock platform client with scripted responses and a shared call log.
pub struct MockPlatform {
    calls: Mutex<Vec<PlatformCall>>,
    user_info: UserInfoBehavior,
    fail_presence: bool,
    fail_content_send: bool,
}

impl MockPlatform {
    /// All calls succeed; `get_user_info` answers with no attributes.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            user_info: UserInfoBehavior::Respond(UserAttributes::new()),
            fail_presence: false,
            fail_content_send: false,
        }
    }

    /// `get_user_info` answers with the given attributes.
    pub fn with_attributes(attributes: UserAttributes) -> Self {
        Self {
            user_info: UserInfoBehavior::Respond(attributes),
            ..Self::new()
        }
    }

    /// `get_user_info` fails.
    pub fn with_failing_user_info() -> Self {
        Self {
            user_info: UserInfoBehavior::Fail,
            ..Self::new()
        }
    }

    /// Presence-update sends fail; content sends succeed.
    pub fn failing_presence(mut self) -> Self {
        self.fail_presence = true;
        self
    }

    /// Content sends fail; presence updates succeed.
    pub fn failing_content_send(mut self) -> Self {
        self.fail_content_send = true;
        self
    }

    /// All recorded calls, in arrival order.
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Only the bodies passed to `send_message`, in arrival order.
    pub fn sent_bodies(&self) -> Vec<OutgoingBody> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PlatformCall::Send(body) => Some(body),
                PlatformCall::UserInfo { .. } => None,
            })
            .collect()
    }

    /// Number of `get_user_info` calls.
    pub fn user_info_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, PlatformCall::UserInfo { .. }))
            .count()
    }
}

#[async_trait]
impl PlatformClient for MockPlatform {
    async fn send_message(&self, body: &OutgoingBody) -> Result<()> {
        let is_presence = matches!(body, OutgoingBody::SenderAction { .. });
        if is_presence && self.fail_presence {
            return Err(MessengerError::Platform(
                "presence update rejected".to_string(),
            ));
        }
        if !is_presence && self.fail_content_send {
            return Err(MessengerError::Platform("content send rejected".to_string()));
        }
        self.calls
            .lock()
            .unwrap()
            .push(PlatformCall::Send(body.clone()));
        Ok(())
    }

    async fn get_user_info(
        &self,
        recipient_id: &str,
        required_fields: &[String],
    ) -> Result<UserAttributes> {
        self.calls.lock().unwrap().push(PlatformCall::UserInfo {
            recipient_id: recipient_id.to_string(),
            fields: required_fields.to_vec(),
        });
        match &self.user_info {
            UserInfoBehavior::Respond(attributes) => Ok(attributes.clone()),
            UserInfoBehavior::Fail => Err(MessengerError::Platform(
                "user info lookup rejected".to_string(),
            )),
        }
    }
}
