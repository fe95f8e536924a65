//! Interactive client launcher.

use anyhow::{Context, Result};
use ewise_core::config::Config;
use ewise_core::route::Route;

use crate::modes;

pub async fn run(config: &Config, start: Option<Route>) -> Result<()> {
    modes::run_tui(config, super::session(), start)
        .await
        .context("interactive client failed")
}
