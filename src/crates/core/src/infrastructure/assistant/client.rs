use anyhow::{anyhow, Context, Result};
use log::trace;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::json;
use sidekick_core_types::MessageRole;
use std::time::Duration;

use super::types::{MessageList, RunObject, ThreadObject};

// The thread/run API surface requires an explicit opt-in header on every call.
const BETA_HEADER: &str = "OpenAI-Beta";
const BETA_HEADER_VALUE: &str = "assistants=v2";

/// HTTP client for the external assistant job service.
///
/// One client is built per invocation from the credential the host resolved
/// and dropped when the invocation finishes; nothing is shared process-wide.
pub struct AssistantClient {
    http: reqwest::Client,
    base_url: String,
}

impl AssistantClient {
    pub fn new(base_url: &str, api_key: &str, request_timeout: Duration) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .context("API key is not a valid header value")?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(BETA_HEADER, HeaderValue::from_static(BETA_HEADER_VALUE));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(request_timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Opens a new conversation thread.
    pub async fn create_thread(&self) -> Result<ThreadObject> {
        let url = format!("{}/threads", self.base_url);
        let response = self
            .http
            .post(&url)
            .send()
            .await
            .context("create-thread request failed")?;
        Self::parse(response, "create-thread").await
    }

    /// Attaches one authored message to a thread.
    pub async fn create_message(
        &self,
        thread_id: &str,
        role: MessageRole,
        text: &str,
    ) -> Result<()> {
        let url = format!("{}/threads/{}/messages", self.base_url, thread_id);
        let response = self
            .http
            .post(&url)
            .json(&json!({ "role": role, "content": text }))
            .send()
            .await
            .context("post-message request failed")?;
        Self::check(response, "post-message").await?;
        Ok(())
    }

    /// Schedules asynchronous execution of a thread under the named
    /// execution context.
    pub async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<RunObject> {
        let url = format!("{}/threads/{}/runs", self.base_url, thread_id);
        let response = self
            .http
            .post(&url)
            .json(&json!({ "assistant_id": assistant_id }))
            .send()
            .await
            .context("start-run request failed")?;
        Self::parse(response, "start-run").await
    }

    pub async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<RunObject> {
        let url = format!("{}/threads/{}/runs/{}", self.base_url, thread_id, run_id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("run-status request failed")?;
        Self::parse(response, "run-status").await
    }

    /// Fetches the thread's messages, ordered most-recent-first.
    pub async fn list_messages(&self, thread_id: &str) -> Result<MessageList> {
        let url = format!("{}/threads/{}/messages", self.base_url, thread_id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("list-messages request failed")?;
        Self::parse(response, "list-messages").await
    }

    async fn check(response: reqwest::Response, operation: &str) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("{} returned {}: {}", operation, status, body));
        }
        Ok(response)
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response, operation: &str) -> Result<T> {
        let response = Self::check(response, operation).await?;
        trace!("Assistant service responded: operation={}", operation);
        response
            .json::<T>()
            .await
            .with_context(|| format!("{} returned an unexpected payload", operation))
    }
}
