use thiserror::Error;

pub type SidekickResult<T> = Result<T, SidekickError>;

/// Crate-level error surfaced to the hosting layer.
///
/// Hosts only need to tell caller misuse apart from everything else: any
/// downstream fault collapses into `Processing`, keeping the originating
/// diagnostic in the message for logs.
#[derive(Debug, Error)]
pub enum SidekickError {
    /// The caller supplied no usable text. No external calls were made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Thread creation, message posting, run start, polling transport, or a
    /// run that settled in terminal failure.
    #[error("failed to process message: {0}")]
    Processing(String),

    /// The run never reached a terminal status within the configured
    /// deadline, or the host cancelled the invocation.
    #[error("timed out waiting for assistant run: {0}")]
    Timeout(String),
}
