use anyhow::anyhow;
use log::{debug, error, trace, warn};
use sidekick_core_types::{CompletionRequest, CompletionResponse, MessageRole};
use tokio::time::{sleep, Instant};
use tokio_util::sync::CancellationToken;

use crate::infrastructure::assistant::{AssistantClient, MessageList, RunStatus};
use crate::util::errors::{SidekickError, SidekickResult};

use super::config::CompletionConfig;

/// Returned when a run settles successfully but the thread holds no
/// assistant-authored text. A settled run with nothing to say is a valid
/// outcome, not an error.
pub const NO_RESPONSE_FALLBACK: &str = "No response from assistant";

/// Internal failure classes of the pipeline; collapsed into the crate error
/// once, at the `complete` boundary.
enum PipelineError {
    Service(anyhow::Error),
    Timeout(String),
}

impl From<anyhow::Error> for PipelineError {
    fn from(err: anyhow::Error) -> Self {
        PipelineError::Service(err)
    }
}

/// Drives one completion request through the external job protocol.
///
/// Each invocation is a self-contained sequential workflow: a fresh thread,
/// one caller message, one run. Invocations may run concurrently in the
/// hosting process; they share no state.
pub struct CompletionOrchestrator {
    config: CompletionConfig,
}

impl CompletionOrchestrator {
    pub fn new(config: CompletionConfig) -> Self {
        Self { config }
    }

    /// Runs one completion to the end.
    ///
    /// The cancellation token is owned by the host; firing it stops further
    /// polling at the next loop iteration and surfaces as `Timeout`.
    pub async fn complete(
        &self,
        request: CompletionRequest,
        cancel_token: CancellationToken,
    ) -> SidekickResult<CompletionResponse> {
        let user_message = request.user_message.trim();
        if user_message.is_empty() {
            return Err(SidekickError::InvalidInput(
                "userMessage must be a non-empty string".to_string(),
            ));
        }

        match self.drive(user_message, &cancel_token).await {
            Ok(output_text) => Ok(CompletionResponse { output_text }),
            Err(PipelineError::Timeout(message)) => {
                warn!("Completion timed out: {}", message);
                Err(SidekickError::Timeout(message))
            }
            Err(PipelineError::Service(err)) => {
                error!("Completion pipeline failed: {:#}", err);
                Err(SidekickError::Processing(format!("{:#}", err)))
            }
        }
    }

    async fn drive(
        &self,
        user_message: &str,
        cancel_token: &CancellationToken,
    ) -> Result<String, PipelineError> {
        let client = AssistantClient::new(
            &self.config.base_url,
            &self.config.api_key,
            self.config.request_timeout,
        )?;

        let thread = client.create_thread().await?;
        debug!("Created thread: thread_id={}", thread.id);

        client
            .create_message(&thread.id, MessageRole::User, user_message)
            .await?;

        let run = client
            .create_run(&thread.id, &self.config.assistant_id)
            .await?;
        debug!("Started run: thread_id={} run_id={}", thread.id, run.id);

        // The id pair stays fixed for the whole polling phase.
        let thread_id = thread.id;
        let run_id = run.id;

        let deadline = Instant::now() + self.config.run_deadline;
        loop {
            if cancel_token.is_cancelled() {
                return Err(PipelineError::Timeout(format!(
                    "cancelled while waiting for run {}",
                    run_id
                )));
            }

            let run = client.get_run(&thread_id, &run_id).await?;
            match run.status {
                RunStatus::Completed => break,
                RunStatus::Failed => {
                    return Err(PipelineError::Service(anyhow!(
                        "run {} reported terminal failure",
                        run_id
                    )));
                }
                status => {
                    trace!("Run still settling: run_id={} status={:?}", run_id, status);
                }
            }

            if Instant::now() >= deadline {
                return Err(PipelineError::Timeout(format!(
                    "run {} did not reach a terminal status within {:?}",
                    run_id, self.config.run_deadline
                )));
            }
            sleep(self.config.poll_interval).await;
        }

        let messages = client.list_messages(&thread_id).await?;
        Ok(extract_reply(&messages))
    }
}

/// Picks the newest assistant-authored text; the list arrives
/// most-recent-first. Caller-authored entries are never selected, wherever
/// they appear in the list.
fn extract_reply(messages: &MessageList) -> String {
    messages
        .data
        .iter()
        .find(|message| message.role == MessageRole::Assistant)
        .and_then(|message| message.primary_text())
        .filter(|text| !text.is_empty())
        .map(|text| text.to_string())
        .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string())
}
