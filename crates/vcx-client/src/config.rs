/// Connection settings for the scheduler web API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL, e.g. `http://scheduler:8001`.
    pub endpoint: String,
    pub username: String,
    pub password: String,
    /// Per-request timeout.
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8001".to_string(),
            username: String::new(),
            password: String::new(),
            timeout_ms: 10_000,
        }
    }
}
