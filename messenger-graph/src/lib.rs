//! # messenger-graph
//!
//! Graph API layer: [`GraphClient`] implements [`messenger_core::PlatformClient`] against the
//! Send API (`POST /me/messages`) and User Profile API (`GET /<psid>?fields=...`), plus
//! env-driven [`GraphConfig`]. Handles only platform connectivity; the pipeline lives in
//! messenger-dispatch.

mod client;
mod config;

pub use client::GraphClient;
pub use config::GraphConfig;
