use std::sync::Arc;
use std::time::Instant;

use axum::{Router, extract::State, http::header, response::IntoResponse, routing::get};
use tracing::{debug, error};

use vcx_model::JobSource;
use vcx_prometheus::{JobMetrics, TEXT_FORMAT, encode};

use crate::error::ApiError;
use crate::policy::{FailurePolicy, FatalSignal};

/// Scrape endpoint builder.
pub struct MetricsApi<S> {
    source: Arc<S>,
    metrics: Arc<JobMetrics>,
    policy: FailurePolicy,
    fatal: FatalSignal,
}

struct ScrapeState<S> {
    source: Arc<S>,
    metrics: Arc<JobMetrics>,
    policy: FailurePolicy,
    fatal: FatalSignal,
}

impl<S> MetricsApi<S>
where
    S: JobSource,
{
    pub fn new(source: Arc<S>, metrics: Arc<JobMetrics>) -> Self {
        Self {
            source,
            metrics,
            policy: FailurePolicy::default(),
            fatal: FatalSignal::new(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Share `fatal` with the serve loop so it can shut down on escalation.
    pub fn with_fatal_signal(mut self, fatal: FatalSignal) -> Self {
        self.fatal = fatal;
        self
    }

    /// Build axum router with mounted endpoints.
    ///
    /// Routes:
    /// - GET /metrics - Prometheus scrape
    pub fn router(self) -> Router {
        let state = ScrapeState {
            source: self.source,
            metrics: self.metrics,
            policy: self.policy,
            fatal: self.fatal,
        };
        Router::new()
            .route("/metrics", get(scrape::<S>))
            .with_state(Arc::new(state))
    }
}

/// GET /metrics
///
/// Fetches once, then either answers every job's samples or none at all.
async fn scrape<S>(State(state): State<Arc<ScrapeState<S>>>) -> Result<impl IntoResponse, ApiError>
where
    S: JobSource,
{
    let started = Instant::now();

    let jobs = match state.source.fetch_jobs().await {
        Ok(jobs) => jobs,
        Err(e) => {
            error!(error = %e, policy = ?state.policy, "job fetch failed, scrape aborted");
            if state.policy == FailurePolicy::Exit {
                state.fatal.raise(format!("job fetch failed: {e}"));
            }
            return Err(ApiError::Fetch(e));
        }
    };

    let samples = encode(&jobs);
    let body = state.metrics.render(&samples)?;
    debug!(
        jobs = jobs.len(),
        samples = samples.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "scrape served"
    );

    Ok(([(header::CONTENT_TYPE, TEXT_FORMAT)], body))
}
