use std::net::SocketAddr;

use clap::Parser;

/// Prometheus exporter for scheduled job state.
#[derive(Parser, Debug)]
#[command(
    name = "vcx-exporterd",
    version,
    about = "Exposes scheduler job state as Prometheus gauges on /metrics"
)]
pub struct Cli {
    /// Address the /metrics endpoint listens on.
    #[arg(long, env = "VCX_LISTEN", default_value = "0.0.0.0:8008")]
    pub listen: SocketAddr,

    /// Scheduler web API base URL.
    #[arg(long, env = "VCX_ENDPOINT", default_value = "http://localhost:8001")]
    pub endpoint: String,

    /// Scheduler API user.
    #[arg(long, env = "VCX_USERNAME", default_value = "")]
    pub username: String,

    /// Scheduler API password.
    #[arg(long, env = "VCX_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    /// Timeout for each scheduler API request, in milliseconds.
    #[arg(long, env = "VCX_TIMEOUT_MS", default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Reaction to a failed job fetch (exit, unavailable).
    #[arg(long, env = "VCX_ON_FETCH_ERROR", default_value = "exit")]
    pub on_fetch_error: String,

    /// Log output format (text, json, journald).
    #[arg(long, env = "VCX_LOG_FORMAT", default_value = "text")]
    pub log_format: String,

    /// Log filter directives (trace, debug, info, warn, error).
    #[arg(long, env = "VCX_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
