//! CLI command handlers.

pub mod auth;
pub mod config;
pub mod tui;
pub mod users;

use std::sync::Arc;

use anyhow::Result;
use ewise_core::api::{ApiClient, ApiConfig};
use ewise_core::config::Config;
use ewise_core::session::{FileSessionStore, SessionStore};

pub(crate) const NOT_LOGGED_IN: &str = "Not logged in. Run `ewise login` first.";

/// Session store at the default location.
pub(crate) fn session() -> Arc<dyn SessionStore> {
    Arc::new(FileSessionStore::default_location())
}

/// Builds a client over the stored session.
pub(crate) fn client(config: &Config, session: Arc<dyn SessionStore>) -> Result<ApiClient> {
    ApiClient::new(ApiConfig::from_config(config)?, session)
}

/// Builds a client for commands that need a stored token.
pub(crate) fn authed_client(config: &Config) -> Result<ApiClient> {
    let session = session();
    if !session.is_logged_in() {
        anyhow::bail!(NOT_LOGGED_IN);
    }
    client(config, session)
}
