//! Session token storage.
//!
//! The session is a single optional bearer token. It is written on login,
//! read before every API request, and cleared on logout. Tokens are never
//! logged or displayed in full.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// Narrow interface over wherever the token lives.
pub trait SessionStore: Send + Sync {
    /// Returns the current token, if any.
    fn token(&self) -> Option<String>;

    /// Replaces the stored token.
    ///
    /// # Errors
    /// Returns an error if the token cannot be persisted.
    fn set_token(&self, token: &str) -> Result<()>;

    /// Removes the stored token. Returns whether one was present.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be updated.
    fn clear(&self) -> Result<bool>;

    fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// Stores the token in `<base>/session.json` with restricted permissions (0600).
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location under `EWISE_HOME`.
    pub fn default_location() -> Self {
        Self::new(paths::session_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<SessionFile> {
        if !self.path.exists() {
            return Ok(SessionFile::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session from {}", self.path.display()))?;
        if contents.trim().is_empty() {
            return Ok(SessionFile::default());
        }

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", self.path.display()))
    }

    fn write(&self, file: &SessionFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(file).context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut handle = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            handle
                .write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents)
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        match self.read() {
            Ok(file) => file.token.filter(|t| !t.is_empty()),
            Err(err) => {
                tracing::warn!("Ignoring unreadable session file: {err:#}");
                None
            }
        }
    }

    fn set_token(&self, token: &str) -> Result<()> {
        self.write(&SessionFile {
            token: Some(token.to_string()),
        })
    }

    fn clear(&self) -> Result<bool> {
        let had_token = self.token().is_some();
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(had_token)
    }
}

/// In-process store, used by tests and embedders.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn set_token(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<bool> {
        let mut guard = self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(guard.take().is_some())
    }
}

/// Masks a token for display, showing only a short prefix.
pub fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(4).collect();
    if token.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{prefix}...")
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_file_store_missing_file_has_no_token() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        assert_eq!(store.token(), None);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_file_store_set_then_read() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));

        store.set_token("QpwL5tke4Pnpja7X4").unwrap();

        assert_eq!(store.token().as_deref(), Some("QpwL5tke4Pnpja7X4"));
        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("QpwL5tke4Pnpja7X4"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        store.set_token("secret").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_file_store_clear_removes_token() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        store.set_token("abc123").unwrap();

        assert!(store.clear().unwrap());
        assert_eq!(store.token(), None);
        assert!(!store.path().exists());

        // Second clear reports nothing was there.
        assert!(!store.clear().unwrap());
    }

    #[test]
    fn test_file_store_corrupt_file_reads_as_logged_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::new(&path);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert!(!store.is_logged_in());
        store.set_token("t1").unwrap();
        assert_eq!(store.token().as_deref(), Some("t1"));
        assert!(store.clear().unwrap());
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("QpwL5tke4Pnpja7X4"), "QpwL...");
        assert_eq!(mask_token("abc"), "****");
    }
}
