//! Authenticated HTTP JSON client.
//!
//! Every page in the dashboard is fetch-then-normalize; this is the fetch
//! half. The client reads the bearer token from the session store on each
//! request, logs a request id per call, and maps error statuses into
//! [`ClientError`]. Response bodies are handed to the normalizers as raw
//! [`serde_json::Value`]s; the client makes no shape guarantees.

use crate::config::ApiConfig;
use classdesk_session::{SessionStore, slots};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

/// Errors surfaced by the HTTP layer.
///
/// Normalization itself is total; these are the only failures callers of
/// the fetch services need to handle.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend rejected the session token. The stale token has already
    /// been cleared from the store; the caller should redirect to login.
    #[error("session is not authorized")]
    Unauthorized,

    /// Any other non-success status from the backend.
    #[error("request failed with status {0}")]
    Status(StatusCode),

    /// Connection, timeout, or body-decode failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// HTTP client bound to the backend base URL and the session store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, store: Arc<dyn SessionStore>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            store,
        })
    }

    /// GET a backend path and return the decoded JSON body.
    ///
    /// A 401 clears the cached token and maps to
    /// [`ClientError::Unauthorized`]; other error statuses map to
    /// [`ClientError::Status`].
    pub async fn get_json(&self, path: &str) -> Result<Value, ClientError> {
        let request_id = Uuid::new_v4().to_string();
        let url = format!("{}{}", self.base_url, path);

        debug!(request_id = %request_id, %url, "outgoing request");

        let mut request = self.http.get(&url);
        if let Some(token) = self.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!(request_id = %request_id, %url, "unauthorized; clearing session token");
            self.store.remove(slots::AUTH_TOKEN);
            return Err(ClientError::Unauthorized);
        }
        if !status.is_success() {
            warn!(request_id = %request_id, %url, status = %status.as_u16(), "request failed");
            return Err(ClientError::Status(status));
        }

        let body = response.json::<Value>().await?;
        debug!(request_id = %request_id, %url, "request completed");
        Ok(body)
    }

    /// The bearer token from the session store, if one is cached.
    ///
    /// Tokens are stored as JSON blobs; a JSON string unwraps, anything
    /// else is used verbatim.
    fn token(&self) -> Option<String> {
        let raw = self.store.get(slots::AUTH_TOKEN)?;
        if raw.is_empty() {
            return None;
        }
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::String(token)) => Some(token),
            _ => Some(raw),
        }
    }
}
