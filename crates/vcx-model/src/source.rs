use async_trait::async_trait;

use crate::{JobRecord, SourceError};

/// Upstream provider of job snapshots.
///
/// Implementations must only observe scheduler state and must return a
/// consistent snapshot: every record comes from the same fetch.
#[async_trait]
pub trait JobSource: Send + Sync + 'static {
    /// Fetch the current ordered list of jobs.
    async fn fetch_jobs(&self) -> Result<Vec<JobRecord>, SourceError>;
}
