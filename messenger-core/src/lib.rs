//! # messenger-core
//!
//! Core types and traits for the Messenger adapter: [`PlatformClient`], outbound message and
//! presence types, the error taxonomy, and tracing initialization. Transport-agnostic; used by
//! messenger-dispatch and messenger-graph.

pub mod error;
pub mod logger;
pub mod platform;
pub mod types;

pub use error::{MessengerError, Result};
pub use logger::init_tracing;
pub use platform::PlatformClient;
pub use types::{
    Attachment, MessageContent, OutboundMessage, OutgoingBody, RecipientRef, SenderAction,
    UserAttributes,
};
