//! # messenger-dispatch
//!
//! The outbound message pipeline: [`estimate_delay`] (word-count typing delay),
//! [`TextPersonalizer`] (`##field##` substitution from profile attributes),
//! [`PresenceNotifier`] (typing_on / mark_seen signals), and [`MessageDispatcher`] composing
//! them into one strictly ordered send per call. No persistence, no retries, no inbound logic.

pub mod delay;
pub mod dispatcher;
pub mod personalize;
pub mod presence;

pub use delay::estimate_delay;
pub use dispatcher::MessageDispatcher;
pub use personalize::TextPersonalizer;
pub use presence::PresenceNotifier;
