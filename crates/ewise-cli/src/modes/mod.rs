//! Runtime execution modes.
//!
//! - plain subcommands: one request, output on stdout
//! - `tui`: Full-screen interactive terminal UI (optional feature)

#[cfg(feature = "tui")]
pub use ewise_tui::run_tui;

#[cfg(not(feature = "tui"))]
pub async fn run_tui(
    _config: &ewise_core::config::Config,
    _session: std::sync::Arc<dyn ewise_core::session::SessionStore>,
    _start: Option<ewise_core::route::Route>,
) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
