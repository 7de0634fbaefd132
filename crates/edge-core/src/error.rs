//! Platform error type.

/// Error type for workload operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),

    #[error("Sink already completed")]
    Completed,

    #[error("Method {0} not allowed")]
    MethodNotAllowed(http::Method),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
