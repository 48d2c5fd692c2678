//! Prometheus encoding of scheduler job state.
//!
//! [`encode`] turns a job snapshot into six gauge samples per job and
//! [`JobMetrics`] renders those samples in the Prometheus text format.
//!
//! ## Example
//! ```rust
//! use vcx_model::JobRecord;
//! use vcx_prometheus::{JobMetrics, encode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = JobMetrics::new()?;
//! let jobs = vec![
//!     JobRecord::new("Backup", "42")
//!         .with_active(true)
//!         .with_exit(0, 1)
//!         .with_execution(12.5, "2024-01-01T00:00:00Z"),
//! ];
//!
//! let samples = encode(&jobs);
//! assert_eq!(samples.len(), 6);
//!
//! let body = String::from_utf8(metrics.render(&samples)?)?;
//! assert!(body.contains("# TYPE job_exit_code gauge"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! All gauges carry the `jobName` and `jobId` labels.
//! - `job_active` - 1 active, 0 inactive (scrape time)
//! - `job_status` - 1 waiting, 0 running (scrape time)
//! - `job_exit_code` - last exit code (last execution time)
//! - `job_exit_code_result` - 1 success, 2 fail/unknown/running, 3 never ran (last execution time)
//! - `job_missed` - 1 missed, 0 not missed (last missed time)
//! - `job_execution_time` - last run duration in seconds (last execution time)
//!
//! ## HTTP Server
//! This crate does NOT serve `/metrics`; see `vcx-api`.

mod kind;
pub use kind::{LABEL_NAMES, MetricKind};

mod encoder;
pub use encoder::{MetricSample, encode, gauge_flag, parse_timestamp};

mod exposition;
pub use exposition::JobMetrics;

pub use prometheus::TEXT_FORMAT;
