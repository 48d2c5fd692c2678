use std::net::SocketAddr;

use thiserror::Error;

use vcx_api::{FailurePolicy, InvalidPolicy};
use vcx_client::ClientConfig;
use vcx_observe::{LoggerConfig, LoggerError};

use crate::cli::Cli;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Logger(#[from] LoggerError),

    #[error(transparent)]
    Policy(#[from] InvalidPolicy),

    #[error("scheduler request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Everything the daemon needs to start.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    pub listen: SocketAddr,
    pub client: ClientConfig,
    pub logger: LoggerConfig,
    pub policy: FailurePolicy,
}

impl TryFrom<Cli> for ExporterConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let logger = LoggerConfig {
            format: cli.log_format.parse()?,
            level: cli.log_level,
            ..Default::default()
        };
        let client = ClientConfig {
            endpoint: cli.endpoint,
            username: cli.username,
            password: cli.password,
            timeout_ms: cli.timeout_ms,
        };

        Ok(Self {
            listen: cli.listen,
            policy: cli.on_fetch_error.parse()?,
            client,
            logger,
        })
    }
}
