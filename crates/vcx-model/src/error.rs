use thiserror::Error;

/// Failure to obtain a job snapshot from the scheduler.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("scheduler unreachable: {0}")]
    Transport(String),

    #[error("scheduler rejected request: {0}")]
    Rejected(String),

    #[error("failed to decode scheduler response: {0}")]
    Decode(String),
}
