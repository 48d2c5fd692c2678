use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info, warn};

use vcx_api::{FailurePolicy, FatalSignal, MetricsApi};
use vcx_model::JobSource;
use vcx_prometheus::JobMetrics;

/// Serve `/metrics` on `listener` until `stop` resolves or a scrape escalates.
///
/// A fetch failure under [`FailurePolicy::Exit`] drains the server and
/// returns the failure reason as `Err`, so the process exits non-zero.
pub async fn run<S, F>(
    listener: TcpListener,
    source: Arc<S>,
    metrics: Arc<JobMetrics>,
    policy: FailurePolicy,
    stop: F,
) -> anyhow::Result<()>
where
    S: JobSource,
    F: Future<Output = ()> + Send + 'static,
{
    let fatal = FatalSignal::new();
    let router = MetricsApi::new(source, metrics)
        .with_policy(policy)
        .with_fatal_signal(fatal.clone())
        .router();
    info!(addr = %listener.local_addr()?, "serving /metrics");

    let escalation = fatal.clone();
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = stop => info!("shutdown requested"),
                _ = escalation.raised() => warn!("fatal scrape failure, shutting down"),
            }
        })
        .await?;

    if let Some(reason) = fatal.reason() {
        error!(reason, "exporter stopped after fatal scrape failure");
        anyhow::bail!("{reason}");
    }
    info!("exporter stopped");
    Ok(())
}
