//! Scheduler job exporter daemon.
//!
//! ```sh
//! # Defaults: listen on 0.0.0.0:8008, scheduler at http://localhost:8001
//! vcx-exporterd --username monitor --password "$VCX_PASSWORD"
//!
//! # Answer 503 on scheduler outages instead of exiting
//! vcx-exporterd --on-fetch-error unavailable --log-format json
//! ```

mod cli;
mod config;
mod serve;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use vcx_client::SchedulerClient;
use vcx_observe::logger_init;
use vcx_prometheus::JobMetrics;

use crate::cli::Cli;
use crate::config::ExporterConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Config
    let config = ExporterConfig::try_from(Cli::parse())?;

    // 2) Logger
    logger_init(&config.logger)?;
    info!(
        listen = %config.listen,
        endpoint = %config.client.endpoint,
        policy = ?config.policy,
        "exporter configured"
    );

    // 3) Encoder + scheduler client
    let metrics = Arc::new(JobMetrics::new()?);
    let source = Arc::new(SchedulerClient::new(config.client.clone())?);

    // 4) Listener
    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;

    // 5) Serve until a signal or a fatal scrape failure
    serve::run(listener, source, metrics, config.policy, terminate()).await
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, "SIGTERM handler unavailable");
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }
}

#[cfg(not(unix))]
async fn terminate() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
}
