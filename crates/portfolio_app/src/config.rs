// SPDX-License-Identifier: MIT OR Apache-2.0
//! Viewer configuration loaded from `portfolio.ron`.

use portfolio_reveal::{ConfigError, FileSessionStore, MemorySessionStore, RevealConfig, SessionStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the session flag lives
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionBackend {
    /// RON file in the OS temp directory
    #[default]
    TempFile,
    /// RON file at an explicit path
    File(PathBuf),
    /// Process memory only; every launch plays the intro
    Memory,
}

/// Viewer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Reveal sequence timing
    #[serde(default = "default_reveal")]
    pub reveal: RevealConfig,
    /// Session flag storage
    #[serde(default)]
    pub session: SessionBackend,
    /// Scroll-triggered section entrances; when off, every section starts shown
    #[serde(default = "default_entrance_animations")]
    pub entrance_animations: bool,
    /// Initial window width (logical pixels)
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Initial window height (logical pixels)
    #[serde(default = "default_window_height")]
    pub window_height: u32,
}

// Curtain delay plus slide is 2 s; the fallback fires at twice that.
fn default_reveal() -> RevealConfig {
    RevealConfig::default().with_curtain_fallback(std::time::Duration::from_secs(4))
}

fn default_entrance_animations() -> bool {
    true
}

fn default_window_width() -> u32 {
    1440
}

fn default_window_height() -> u32 {
    900
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reveal: default_reveal(),
            session: SessionBackend::default(),
            entrance_animations: default_entrance_animations(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppConfig {
    /// Load from a RON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&content)?)
    }

    /// Load from `path`, falling back to defaults when it is missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No {} found, using default config", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Build the configured session store
    pub fn session_store(&self) -> Box<dyn SessionStore> {
        match &self.session {
            SessionBackend::TempFile => Box::new(FileSessionStore::in_temp_dir()),
            SessionBackend::File(path) => Box::new(FileSessionStore::new(path)),
            SessionBackend::Memory => Box::new(MemorySessionStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.session, SessionBackend::TempFile);
        assert_eq!(config.reveal.loading_delay_ms, 3000);
        assert!(config.reveal.curtain_fallback().is_some());
    }

    #[test]
    fn test_partial_config() {
        let config: AppConfig = ron::from_str("(session: Memory, window_width: 1024)").unwrap();
        assert_eq!(config.session, SessionBackend::Memory);
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 900);
        assert!(config.entrance_animations);
        assert_eq!(config.reveal, default_reveal());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load_or_default(Path::new("definitely/not/here/portfolio.ron"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_memory_backend_starts_empty() {
        let config = AppConfig {
            session: SessionBackend::Memory,
            ..AppConfig::default()
        };
        let store = config.session_store();
        assert_eq!(store.get(&config.reveal.session_key).unwrap(), None);
    }
}
