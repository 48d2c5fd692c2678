//! JSON shapes of the scheduler web API.

use serde::Deserialize;
use vcx_model::JobRecord;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Logon {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Job {
    pub name: String,
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(default)]
    pub missed: bool,
    #[serde(default)]
    pub missed_date: Option<String>,
    #[serde(default)]
    pub stats: Stats,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct Stats {
    pub active: bool,
    pub status: i32,
    pub exit_code: i32,
    pub exit_code_result: i32,
    pub execution_time: f64,
    pub date_last_execution: Option<String>,
}

impl From<Job> for JobRecord {
    fn from(job: Job) -> Self {
        JobRecord {
            name: job.name,
            id: job.id,
            active: job.stats.active,
            status: job.stats.status,
            exit_code: job.stats.exit_code,
            exit_code_result: job.stats.exit_code_result,
            execution_time_seconds: job.stats.execution_time,
            missed: job.missed,
            last_execution_timestamp: job.stats.date_last_execution.unwrap_or_default(),
            last_missed_timestamp: job.missed_date.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_job() {
        let json = r#"{
            "Name": "Backup",
            "Id": "42",
            "Missed": true,
            "MissedDate": "2024-01-02T03:00:00Z",
            "Stats": {
                "Active": true,
                "Status": 1,
                "ExitCode": 0,
                "ExitCodeResult": 1,
                "ExecutionTime": 12.5,
                "DateLastExecution": "2024-01-01T00:00:00Z"
            }
        }"#;
        let job: JobRecord = serde_json::from_str::<Job>(json).unwrap().into();

        assert_eq!(
            job,
            JobRecord::new("Backup", "42")
                .with_active(true)
                .with_status(1)
                .with_exit(0, 1)
                .with_execution(12.5, "2024-01-01T00:00:00Z")
                .with_missed(true, "2024-01-02T03:00:00Z")
        );
    }

    #[test]
    fn missing_and_null_fields_default() {
        let json = r#"{"Name": "Idle", "ID": "7", "MissedDate": null, "Stats": {"Active": false}}"#;
        let job: JobRecord = serde_json::from_str::<Job>(json).unwrap().into();

        assert_eq!(job.id, "7");
        assert!(!job.missed);
        assert_eq!(job.status, 0);
        assert_eq!(job.execution_time_seconds, 0.0);
        assert!(job.last_execution_timestamp.is_empty());
        assert!(job.last_missed_timestamp.is_empty());
    }

    #[test]
    fn logon_token_optional() {
        let logon: Logon = serde_json::from_str(r#"{"Token": "abc"}"#).unwrap();
        assert_eq!(logon.token.as_deref(), Some("abc"));

        let logon: Logon = serde_json::from_str(r#"{"Result": "denied"}"#).unwrap();
        assert!(logon.token.is_none());
    }
}
