use serde::{Deserialize, Serialize};

/// Author role attached to every message on a conversation thread.
///
/// `User` marks caller-authored input; `Assistant` marks text appended by
/// the automated responder while a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}
