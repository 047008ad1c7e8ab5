// SPDX-License-Identifier: MIT OR Apache-2.0
//! Session-scoped key/value storage.
//!
//! The reveal sequence persists exactly one fact across restarts: whether
//! the intro already played this session. Stores are injected so tests can
//! swap in memory-backed or failing fakes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key of the "intro already played" flag
pub const SESSION_FLAG_KEY: &str = "portfolioLoaded";

/// Session storage errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Backing file could not be read or written
    #[error("Session storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing file is not a valid session map
    #[error("Failed to parse session storage: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Session map could not be encoded
    #[error("Failed to serialize session storage: {0}")]
    Serialize(#[from] ron::Error),

    /// Storage is not available in this environment
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),
}

/// Key/value storage that lives for one session
pub trait SessionStore {
    /// Read a value. `Ok(None)` means the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError>;
}

impl<T: SessionStore + ?Sized> SessionStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        (**self).set(key, value)
    }
}

/// In-memory session store
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: IndexMap<String, String>,
}

impl MemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the given entries already present
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// On-disk layout of a file-backed session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    entries: IndexMap<String, String>,
}

/// Session store persisted as a RON file.
///
/// Every write rewrites the whole file, so concurrent writers resolve as
/// last-write-wins.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// File name used under the temp directory by [`FileSessionStore::in_temp_dir`]
    pub const DEFAULT_FILE_NAME: &'static str = "portfolio_session.ron";

    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store in the OS temp directory
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir().join(Self::DEFAULT_FILE_NAME))
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the backing file, ending the session
    pub fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn load(&self) -> Result<SessionFile, SessionError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(SessionFile::default()),
            Err(e) => return Err(e.into()),
        };
        Ok(ron::from_str(&content)?)
    }

    fn save(&self, file: &SessionFile) -> Result<(), SessionError> {
        let content = ron::ser::to_string_pretty(file, ron::ser::PrettyConfig::default())?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.load()?.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut file = self.load().unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable session file {}: {e}", self.path.display());
            SessionFile::default()
        });
        file.entries.insert(key.to_string(), value.to_string());
        self.save(&file)?;
        tracing::debug!("Session key '{key}' written to {}", self.path.display());
        Ok(())
    }
}
