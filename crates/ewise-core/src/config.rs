//! Configuration management for EWise.
//!
//! Loads configuration from ${EWISE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for EWise configuration and data files.
    //!
    //! EWISE_HOME resolution order:
    //! 1. EWISE_HOME environment variable (if set)
    //! 2. ~/.config/ewise (default)

    use std::path::PathBuf;

    /// Returns the EWise home directory.
    ///
    /// Checks EWISE_HOME env var first, falls back to ~/.config/ewise,
    /// and finally to a relative `.ewise` directory when no home exists.
    pub fn ewise_home() -> PathBuf {
        if let Ok(home) = std::env::var("EWISE_HOME")
            && !home.trim().is_empty()
        {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".ewise"),
            |h| h.join(".config").join("ewise"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        ewise_home().join("config.toml")
    }

    /// Returns the path to the persisted session token.
    pub fn session_path() -> PathBuf {
        ewise_home().join("session.json")
    }

    /// Returns the default log file used in TUI mode.
    pub fn log_path() -> PathBuf {
        ewise_home().join("logs").join("ewise.log")
    }
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// Base URL override (EWISE_BASE_URL wins over this)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Static `x-api-key` header value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Request timeout in seconds (0 disables)
    pub timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_secs: Config::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiSection {
    /// Returns the base URL if set and non-empty.
    pub fn effective_base_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Returns the API key if set and non-empty.
    pub fn effective_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}

/// TUI timing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub notification_secs: u64,
    pub redirect_delay_ms: u64,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            notification_secs: Config::DEFAULT_NOTIFICATION_SECS,
            redirect_delay_ms: Config::DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

impl UiSection {
    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// `EnvFilter` directive, e.g. "info" or "ewise_core=debug"
    pub level: String,
    /// Log file for TUI mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: Config::DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl LogSection {
    /// Returns the configured log file, or `<home>/logs/ewise.log`.
    pub fn file_path(&self) -> PathBuf {
        match self.file.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => paths::log_path(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiSection,
    pub ui: UiSection,
    pub log: LogSection,
}

impl Config {
    const DEFAULT_TIMEOUT_SECS: u64 = 30;
    const DEFAULT_NOTIFICATION_SECS: u64 = 3;
    const DEFAULT_REDIRECT_DELAY_MS: u64 = 2000;
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    ///
    /// # Errors
    /// Returns an error if the file exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.ui.notification_secs, 3);
        assert_eq!(config.ui.redirect_delay_ms, 2000);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "[api]\nbase_url = \"https://proxy.example.com/api\"\n",
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(
            config.api.effective_base_url(),
            Some("https://proxy.example.com/api")
        );
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.ui.notification_secs, 3);
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[api\nbroken").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# EWise Configuration"));
        assert!(contents.contains("# base_url ="));

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        assert!(Config::init(&config_path).is_err());
    }

    #[test]
    fn test_empty_strings_are_unset() {
        let api = ApiSection {
            base_url: Some("   ".to_string()),
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(api.effective_base_url(), None);
        assert_eq!(api.effective_api_key(), None);
    }

    #[test]
    fn test_timeout_zero_disables() {
        let api = ApiSection {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(api.timeout(), None);
        assert_eq!(
            ApiSection::default().timeout(),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_log_file_override() {
        let log = LogSection {
            file: Some("/tmp/custom.log".to_string()),
            ..Default::default()
        };
        assert_eq!(log.file_path(), PathBuf::from("/tmp/custom.log"));
    }
}
