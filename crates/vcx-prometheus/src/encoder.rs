use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use vcx_model::JobRecord;

use crate::MetricKind;

/// One gauge value for one job.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub kind: MetricKind,
    pub job_name: String,
    pub job_id: String,
    pub value: f64,
    /// Explicit sample time. `None` means the scrape time applies.
    pub timestamp: Option<OffsetDateTime>,
}

impl MetricSample {
    /// Label values in [`crate::LABEL_NAMES`] order.
    pub fn label_values(&self) -> [&str; 2] {
        [&self.job_name, &self.job_id]
    }

    /// Explicit sample time in milliseconds since the Unix epoch, floored so
    /// pre-epoch instants stay before the epoch.
    pub fn timestamp_ms(&self) -> Option<i64> {
        self.timestamp
            .map(|ts| ts.unix_timestamp_nanos().div_euclid(1_000_000) as i64)
    }
}

/// Encode a job snapshot into samples, six per job in [`MetricKind::ALL`] order.
///
/// Output preserves input order. Malformed timestamps never fail the
/// encode; the affected samples are pinned to the Unix epoch instead.
pub fn encode(jobs: &[JobRecord]) -> Vec<MetricSample> {
    let mut samples = Vec::with_capacity(jobs.len() * MetricKind::ALL.len());

    for job in jobs {
        let last_execution = parse_timestamp(&job.last_execution_timestamp);
        let last_missed = parse_timestamp(&job.last_missed_timestamp);

        for kind in MetricKind::ALL {
            let (value, timestamp) = match kind {
                MetricKind::Active => (gauge_flag(job.active), None),
                MetricKind::Status => (f64::from(job.status), None),
                MetricKind::ExitCode => (f64::from(job.exit_code), Some(last_execution)),
                MetricKind::ExitCodeResult => {
                    (f64::from(job.exit_code_result), Some(last_execution))
                }
                MetricKind::Missed => (gauge_flag(job.missed), Some(last_missed)),
                MetricKind::ExecutionTime => (job.execution_time_seconds, Some(last_execution)),
            };
            samples.push(MetricSample {
                kind,
                job_name: job.name.clone(),
                job_id: job.id.clone(),
                value,
                timestamp,
            });
        }
    }
    samples
}

/// Gauge encoding of a flag: 1.0 when set, 0.0 otherwise.
#[inline]
pub fn gauge_flag(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

/// Strict RFC 3339 parse, falling back to the Unix epoch.
pub fn parse_timestamp(raw: &str) -> OffsetDateTime {
    OffsetDateTime::parse(raw, &Rfc3339).unwrap_or(OffsetDateTime::UNIX_EPOCH)
}
