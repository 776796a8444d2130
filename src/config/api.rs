use std::env;

/// Backend API connection settings.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL of the school-information backend, no trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("CLASSDESK_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string())
                .trim_end_matches('/')
                .to_string(),
            timeout_secs: env::var("CLASSDESK_API_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
