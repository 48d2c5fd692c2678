use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// What a failed upstream fetch does beyond failing its own scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Raise the [`FatalSignal`] so the process shuts down.
    #[default]
    Exit,
    /// Answer `503` and keep serving.
    Unavailable,
}

#[derive(Debug, Error)]
#[error("invalid failure policy: {0} (expected: exit|unavailable)")]
pub struct InvalidPolicy(pub String);

impl FromStr for FailurePolicy {
    type Err = InvalidPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exit" => Ok(FailurePolicy::Exit),
            "unavailable" | "503" => Ok(FailurePolicy::Unavailable),
            _ => Err(InvalidPolicy(s.to_string())),
        }
    }
}

/// Process-wide escalation for unrecoverable scrape failures.
///
/// Clones share state. The first reason wins; later raises only re-cancel.
#[derive(Debug, Clone, Default)]
pub struct FatalSignal {
    token: CancellationToken,
    reason: Arc<OnceLock<String>>,
}

impl FatalSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self, reason: impl Into<String>) {
        let _ = self.reason.set(reason.into());
        self.token.cancel();
    }

    pub fn is_raised(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.get().map(String::as_str)
    }

    /// Resolves once [`FatalSignal::raise`] has been called on any clone.
    pub async fn raised(&self) {
        self.token.cancelled().await
    }
}
