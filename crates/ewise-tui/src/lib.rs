//! Full-screen TUI for EWise.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};
use std::sync::Arc;

use anyhow::Result;
use ewise_core::api::{ApiClient, ApiConfig};
use ewise_core::config::Config;
use ewise_core::route::{self, Route};
use ewise_core::session::SessionStore;
pub use features::{editor, input, login, notification, users};
pub use runtime::TuiRuntime;

use crate::state::AppState;

/// Runs the interactive client until the user quits.
///
/// `start` is passed through the session guard; without it the client opens
/// on the list view when a token is stored and on login otherwise.
///
/// # Errors
/// Returns an error if stdout is not a terminal, the API configuration is
/// invalid, or the terminal fails.
pub async fn run_tui(
    config: &Config,
    session: Arc<dyn SessionStore>,
    start: Option<Route>,
) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The interactive client requires a terminal.\n\
             Use `ewise users list` for non-interactive access."
        );
    }

    let api = ApiClient::new(ApiConfig::from_config(config)?, Arc::clone(&session))?;
    let initial = start.unwrap_or_else(|| route::initial_route(session.as_ref()));
    tracing::info!(base_url = api.base_url(), route = %initial, "starting TUI");

    let state = AppState::new(session, config.ui.clone());
    let mut runtime = TuiRuntime::new(state, api)?;
    runtime.run(initial)
}
