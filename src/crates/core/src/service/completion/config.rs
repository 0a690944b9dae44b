use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default base URL of the assistant job service.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Fixed delay between run-status polls. Tune for the target service's
/// latency profile; the polling algorithm itself does not change.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Timeout applied to each individual HTTP call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionConfig {
    /// Base URL of the assistant job service.
    pub base_url: String,
    /// Bearer credential resolved by the hosting environment.
    pub api_key: String,
    /// Which configured assistant processes the run.
    pub assistant_id: String,
    /// Delay between run-status polls.
    pub poll_interval: Duration,
    /// Overall bound on the polling phase. Required: a stuck run must never
    /// poll forever, and no production value is assumed here.
    pub run_deadline: Duration,
    /// Timeout for each individual HTTP call.
    pub request_timeout: Duration,
}

impl CompletionConfig {
    pub fn new(
        api_key: impl Into<String>,
        assistant_id: impl Into<String>,
        run_deadline: Duration,
    ) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            assistant_id: assistant_id.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            run_deadline,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}
