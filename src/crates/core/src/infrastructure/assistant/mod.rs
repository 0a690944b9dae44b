//! Assistant job-service access
//!
//! Scoped HTTP client and wire types for the external thread/run protocol.

pub mod client;
pub mod types;

pub use client::AssistantClient;
pub use types::{ContentPart, MessageList, MessageObject, RunObject, RunStatus, ThreadObject};
