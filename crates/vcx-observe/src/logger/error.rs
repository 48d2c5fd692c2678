use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid log format: {0} (expected: text|json|journald)")]
    InvalidFormat(String),
    #[error("journald logging needs linux and the `journald` feature")]
    JournaldNotSupported,
    #[error("global tracing subscriber is already installed")]
    AlreadyInitialized,
    #[error("failed to install tracing subscriber: {0}")]
    InitializationFailed(String),
    #[error("invalid log filter: {0}")]
    InvalidLogLevel(String),
}

impl LoggerError {
    pub(crate) fn from_init(e: impl std::fmt::Display) -> Self {
        let msg = e.to_string();
        if msg.contains("global default") {
            LoggerError::AlreadyInitialized
        } else {
            LoggerError::InitializationFailed(msg)
        }
    }
}
