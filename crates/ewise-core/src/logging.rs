//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so in that mode logs go to a non-blocking
//! file writer. Plain CLI commands log to stderr.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LogSection;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "EWISE_LOG";

/// Where log output should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

/// Builds the filter: `EWISE_LOG` wins over the config level.
fn build_filter(section: &LogSection) -> EnvFilter {
    match std::env::var(LOG_ENV_VAR) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::new(directive),
        _ => EnvFilter::new(section.level.trim()),
    }
}

/// Installs the global subscriber.
///
/// Returns a guard for the file writer that must be held until exit so
/// buffered lines are flushed. Calling this twice is harmless; the second
/// subscriber is simply not installed.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init(section: &LogSection, target: LogTarget) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(section);

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
            Ok(None)
        }
        LogTarget::File => {
            let path = section.file_path();
            let dir = path
                .parent()
                .map_or_else(|| std::path::PathBuf::from("."), std::path::Path::to_path_buf);
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_name = path
                .file_name()
                .map_or_else(|| "ewise.log".into(), std::ffi::OsStr::to_os_string);

            let appender = tracing_appender::rolling::never(&dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .try_init();
            Ok(Some(guard))
        }
    }
}
