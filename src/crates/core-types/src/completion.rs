use serde::{Deserialize, Serialize};

/// Inbound invocation contract delivered by the hosting layer.
///
/// The host transport uses camelCase field names, so `userMessage` on the
/// wire maps to `user_message` here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    pub user_message: String,
}

impl CompletionRequest {
    pub fn new(user_message: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
        }
    }
}

/// Successful result shape returned to the hosting layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub output_text: String,
}
