use serde::Deserialize;
use sidekick_core_types::MessageRole;

/// Run lifecycle as reported by the job service.
///
/// Only `completed` and `failed` are terminal. `Other` absorbs statuses this
/// client does not model (`cancelling`, `requires_action`, ...); those keep
/// the run in the polling phase until the invocation deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
    #[serde(other)]
    Other,
}

impl RunStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Failed)
    }
}

#[derive(Debug, Deserialize)]
pub struct ThreadObject {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct RunObject {
    pub id: String,
    pub status: RunStatus,
}

/// List-messages response. `data` is ordered most-recent-first by the
/// service.
#[derive(Debug, Deserialize)]
pub struct MessageList {
    pub data: Vec<MessageObject>,
}

#[derive(Debug, Deserialize)]
pub struct MessageObject {
    pub role: MessageRole,
    #[serde(default)]
    pub content: Vec<ContentPart>,
}

impl MessageObject {
    /// Primary text of the message: the first content part carrying a
    /// text/value payload.
    pub fn primary_text(&self) -> Option<&str> {
        self.content
            .iter()
            .find_map(|part| part.text.as_ref())
            .map(|text| text.value.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    #[serde(default)]
    pub text: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
pub struct TextValue {
    pub value: String,
}
