use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use vcx_model::{JobRecord, JobSource, SourceError};

use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::wire;

const API_ROOT: &str = "VisualCron/json";
const BODY_PREVIEW: usize = 256;

/// Scheduler web API client.
///
/// Every fetch logs on and lists jobs; tokens are not reused between fetches.
#[derive(Debug, Clone)]
pub struct SchedulerClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SchedulerClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let endpoint = config.endpoint.trim_end_matches('/').to_string();
        let base = Url::parse(&endpoint)
            .map_err(|e| ClientError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::InvalidEndpoint(format!(
                "{endpoint}: unsupported scheme '{}'",
                base.scheme()
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            http,
            config: ClientConfig { endpoint, ..config },
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Log on and list every job known to the scheduler.
    pub async fn jobs(&self) -> Result<Vec<JobRecord>, ClientError> {
        let token = self.logon().await?;
        let url = self.url("Job/List", &[("token", token.as_str())])?;

        let jobs: Vec<wire::Job> = self.get_json(url).await?;
        debug!(count = jobs.len(), "jobs listed");

        Ok(jobs.into_iter().map(JobRecord::from).collect())
    }

    async fn logon(&self) -> Result<String, ClientError> {
        let url = self.url(
            "logon",
            &[
                ("username", self.config.username.as_str()),
                ("password", self.config.password.as_str()),
            ],
        )?;

        let logon: wire::Logon = self.get_json(url).await?;
        match logon.token {
            Some(token) if !token.is_empty() => {
                trace!("logon succeeded");
                Ok(token)
            }
            _ => Err(ClientError::Rejected("logon returned no token".into())),
        }
    }

    fn url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ClientError> {
        let raw = format!("{}/{}/{}", self.config.endpoint, API_ROOT, path);
        Url::parse_with_params(&raw, params)
            .map_err(|e| ClientError::InvalidEndpoint(format!("{raw}: {e}")))
    }

    // Query strings carry credentials, so URLs are stripped from request errors.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ClientError::HttpRequest(e.without_url()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::HttpRequest(e.without_url()))?;

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(BODY_PREVIEW).collect();
            ClientError::InvalidResponse(format!("failed to parse response: {e}, body: {preview}"))
        })
    }
}

#[async_trait]
impl JobSource for SchedulerClient {
    async fn fetch_jobs(&self) -> Result<Vec<JobRecord>, SourceError> {
        Ok(self.jobs().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        Json, Router,
        extract::Query,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
    };
    use serde_json::json;

    use super::*;

    const LOGON: &str = "/VisualCron/json/logon";
    const JOBS: &str = "/VisualCron/json/Job/List";

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(endpoint: String) -> SchedulerClient {
        SchedulerClient::new(ClientConfig {
            endpoint,
            username: "monitor".into(),
            password: "s3cret".into(),
            timeout_ms: 2_000,
        })
        .unwrap()
    }

    async fn logon(Query(q): Query<HashMap<String, String>>) -> Response {
        if q.get("username").map(String::as_str) == Some("monitor")
            && q.get("password").map(String::as_str) == Some("s3cret")
        {
            Json(json!({ "Token": "t-1" })).into_response()
        } else {
            Json(json!({ "Result": "invalid credentials" })).into_response()
        }
    }

    async fn jobs(Query(q): Query<HashMap<String, String>>) -> Response {
        if q.get("token").map(String::as_str) != Some("t-1") {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        Json(json!([
            {
                "Name": "Backup",
                "Id": "42",
                "Missed": false,
                "MissedDate": "",
                "Stats": {
                    "Active": true,
                    "Status": 1,
                    "ExitCode": 0,
                    "ExitCodeResult": 1,
                    "ExecutionTime": 12.5,
                    "DateLastExecution": "2024-01-01T00:00:00Z"
                }
            },
            { "Name": "Cleanup", "Id": "7", "Stats": { "Active": false, "ExitCodeResult": 3 } }
        ]))
        .into_response()
    }

    fn scheduler() -> Router {
        Router::new().route(LOGON, get(logon)).route(JOBS, get(jobs))
    }

    #[tokio::test]
    async fn fetches_jobs_in_scheduler_order() {
        let endpoint = serve(scheduler()).await;
        let jobs = client(format!("{endpoint}/")).fetch_jobs().await.unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(
            jobs[0],
            JobRecord::new("Backup", "42")
                .with_active(true)
                .with_status(1)
                .with_exit(0, 1)
                .with_execution(12.5, "2024-01-01T00:00:00Z")
        );
        assert_eq!(jobs[1].name, "Cleanup");
        assert_eq!(jobs[1].exit_code_result, 3);
        assert!(!jobs[1].active);
    }

    #[tokio::test]
    async fn empty_token_is_rejected() {
        let endpoint = serve(scheduler()).await;
        let mut config = client(endpoint).config;
        config.password = "wrong".into();

        let err = SchedulerClient::new(config).unwrap().jobs().await.unwrap_err();
        assert!(matches!(err, ClientError::Rejected(_)));
    }

    #[tokio::test]
    async fn error_status_maps_to_rejected_source() {
        let router = Router::new()
            .route(LOGON, get(|| async { Json(json!({ "Token": "other" })) }))
            .route(JOBS, get(jobs));
        let endpoint = serve(router).await;

        let err = client(endpoint).fetch_jobs().await.unwrap_err();
        assert!(matches!(err, SourceError::Rejected(ref m) if m.contains("401")));
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let router = Router::new()
            .route(LOGON, get(logon))
            .route(JOBS, get(|| async { "<html>maintenance</html>" }));
        let endpoint = serve(router).await;

        let err = client(endpoint.clone()).jobs().await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(ref m) if m.contains("maintenance")));

        let err = client(endpoint).fetch_jobs().await.unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_scheduler_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{addr}")).fetch_jobs().await.unwrap_err();
        assert!(matches!(err, SourceError::Transport(_)));
        assert!(!err.to_string().contains("s3cret"));
    }

    #[test]
    fn rejects_invalid_endpoints() {
        for endpoint in ["not a url", "ftp://scheduler:21"] {
            let err = SchedulerClient::new(ClientConfig {
                endpoint: endpoint.into(),
                ..Default::default()
            })
            .unwrap_err();
            assert!(matches!(err, ClientError::InvalidEndpoint(_)), "{endpoint}");
        }
    }

    #[test]
    fn builds_api_urls() {
        let client = client("http://scheduler:8001/".into());
        assert_eq!(client.endpoint(), "http://scheduler:8001");

        let url = client.url("Job/List", &[("token", "a b")]).unwrap();
        assert_eq!(url.as_str(), "http://scheduler:8001/VisualCron/json/Job/List?token=a+b");
    }
}
