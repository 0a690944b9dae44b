//! Completion service
//!
//! Drives the external assistant job protocol to completion for one inbound
//! request: create thread, post the caller's message, start a run, poll it
//! to a terminal status, read the reply back out of the thread.

pub mod config;
pub mod orchestrator;

pub use config::CompletionConfig;
pub use orchestrator::{CompletionOrchestrator, NO_RESPONSE_FALLBACK};
