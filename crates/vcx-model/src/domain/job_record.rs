use serde::{Deserialize, Serialize};

/// Scheduler-assigned job identifier, unique within one fetch.
pub type JobId = String;

/// Snapshot of one scheduled job and the statistics of its last run.
///
/// Numeric codes are carried exactly as the scheduler reports them;
/// nothing in this crate validates or remaps them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    /// Human-readable job name.
    pub name: String,
    /// Job identifier.
    pub id: JobId,
    /// Job is enabled and scheduled.
    pub active: bool,
    /// Run status: 1 = waiting, 0 = running.
    pub status: i32,
    /// Last exit code; meaning is defined per job script.
    pub exit_code: i32,
    /// Last exit code classification: 1 = success, 2 = fail/unknown/running, 3 = never ran.
    pub exit_code_result: i32,
    /// Duration of the last run in seconds.
    pub execution_time_seconds: f64,
    /// Job missed its last scheduled run.
    pub missed: bool,
    /// RFC 3339 instant of the last execution. May be empty or malformed.
    #[serde(default)]
    pub last_execution_timestamp: String,
    /// RFC 3339 instant of the last missed run. May be empty or malformed.
    #[serde(default)]
    pub last_missed_timestamp: String,
}

impl JobRecord {
    /// Inactive, never-ran job with the given identity.
    pub fn new(name: impl Into<String>, id: impl Into<JobId>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            active: false,
            status: 1,
            exit_code: 0,
            exit_code_result: 3,
            execution_time_seconds: 0.0,
            missed: false,
            last_execution_timestamp: String::new(),
            last_missed_timestamp: String::new(),
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }

    pub fn with_exit(mut self, exit_code: i32, exit_code_result: i32) -> Self {
        self.exit_code = exit_code;
        self.exit_code_result = exit_code_result;
        self
    }

    pub fn with_execution(mut self, seconds: f64, at: impl Into<String>) -> Self {
        self.execution_time_seconds = seconds;
        self.last_execution_timestamp = at.into();
        self
    }

    pub fn with_missed(mut self, missed: bool, at: impl Into<String>) -> Self {
        self.missed = missed;
        self.last_missed_timestamp = at.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_job_never_ran() {
        let job = JobRecord::new("Backup", "42");
        assert_eq!(job.name, "Backup");
        assert_eq!(job.id, "42");
        assert!(!job.active);
        assert_eq!(job.exit_code_result, 3);
        assert!(job.last_execution_timestamp.is_empty());
        assert!(job.last_missed_timestamp.is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let job = JobRecord::new("Backup", "42")
            .with_active(true)
            .with_status(0)
            .with_exit(7, 2)
            .with_execution(12.5, "2024-01-01T00:00:00Z")
            .with_missed(true, "2024-01-02T00:00:00Z");

        assert!(job.active);
        assert_eq!(job.status, 0);
        assert_eq!(job.exit_code, 7);
        assert_eq!(job.exit_code_result, 2);
        assert_eq!(job.execution_time_seconds, 12.5);
        assert_eq!(job.last_execution_timestamp, "2024-01-01T00:00:00Z");
        assert!(job.missed);
        assert_eq!(job.last_missed_timestamp, "2024-01-02T00:00:00Z");
    }

    #[test]
    fn serde_camel_case() {
        let job = JobRecord::new("Backup", "42").with_exit(1, 1);
        let json = serde_json::to_string(&job).unwrap();
        assert!(json.contains(r#""exitCodeResult":1"#));
        assert!(json.contains(r#""executionTimeSeconds":0.0"#));
        assert!(json.contains(r#""lastExecutionTimestamp":"""#));
        assert!(json.contains(r#""lastMissedTimestamp":"""#));

        let back: JobRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }

    #[test]
    fn serde_reads_timestamp_fields() {
        let json = r#"{
            "name": "Backup",
            "id": "42",
            "active": true,
            "status": 1,
            "exitCode": 0,
            "exitCodeResult": 1,
            "executionTimeSeconds": 12.5,
            "missed": true,
            "lastExecutionTimestamp": "2024-01-01T00:00:00Z",
            "lastMissedTimestamp": "2024-01-02T00:00:00Z"
        }"#;
        let job: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(job.last_execution_timestamp, "2024-01-01T00:00:00Z");
        assert_eq!(job.last_missed_timestamp, "2024-01-02T00:00:00Z");
    }

    #[test]
    fn serde_missing_timestamps_default_empty() {
        let json = r#"{
            "name": "Sync",
            "id": "7",
            "active": true,
            "status": 0,
            "exitCode": 0,
            "exitCodeResult": 2,
            "executionTimeSeconds": 1.5,
            "missed": false
        }"#;
        let job: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(job.name, "Sync");
        assert!(job.last_execution_timestamp.is_empty());
        assert!(job.last_missed_timestamp.is_empty());
    }
}
