use thiserror::Error;
use vcx_model::SourceError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid scheduler endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("http request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("scheduler rejected request: {0}")]
    Rejected(String),

    #[error("invalid scheduler response: {0}")]
    InvalidResponse(String),
}

impl From<ClientError> for SourceError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::HttpRequest(e) => match e.status() {
                Some(status) => SourceError::Rejected(format!("http status {status}")),
                None if e.is_decode() => SourceError::Decode(e.to_string()),
                None => SourceError::Transport(e.to_string()),
            },
            ClientError::InvalidEndpoint(msg) => SourceError::Transport(msg),
            ClientError::Rejected(msg) => SourceError::Rejected(msg),
            ClientError::InvalidResponse(msg) => SourceError::Decode(msg),
        }
    }
}
