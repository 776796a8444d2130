//! Shared application state.

use crate::client::ApiClient;
use crate::config::ApiConfig;
use anyhow::Context;
use classdesk_session::{MemoryStore, SessionStore};
use std::sync::Arc;
use tracing::info;

/// Everything a page needs: configuration, the session store, and the
/// authenticated API client.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: Arc<dyn SessionStore>,
    pub client: ApiClient,
}

/// Build the application state from the environment with an in-memory
/// session store.
pub fn init_app_state() -> anyhow::Result<AppState> {
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env();
    let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new());
    init_app_state_with_store(config, store)
}

/// Build the application state around an existing session store, e.g. one
/// hydrated from an exported browser session.
pub fn init_app_state_with_store(
    config: ApiConfig,
    store: Arc<dyn SessionStore>,
) -> anyhow::Result<AppState> {
    let client =
        ApiClient::new(&config, store.clone()).context("failed to build the API client")?;

    info!(base_url = %config.base_url, "application state initialized");

    Ok(AppState {
        config,
        store,
        client,
    })
}
