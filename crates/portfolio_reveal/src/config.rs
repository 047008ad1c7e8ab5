// SPDX-License-Identifier: MIT OR Apache-2.0
//! Reveal sequence timing configuration.

use crate::session::SESSION_FLAG_KEY;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or written
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid RON
    #[error("Failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Config could not be encoded
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
}

/// Timing and storage settings for the reveal sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// How long the loading intro stays up (ms)
    #[serde(default = "default_loading_delay_ms")]
    pub loading_delay_ms: u64,
    /// Pause between drawing the curtain and opening it (ms)
    #[serde(default = "default_curtain_open_delay_ms")]
    pub curtain_open_delay_ms: u64,
    /// Reveal content anyway if the curtain never reports completion (ms).
    /// `None` waits for the curtain indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curtain_fallback_ms: Option<u64>,
    /// Session storage key of the "already shown" flag
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

fn default_loading_delay_ms() -> u64 {
    3000
}

fn default_curtain_open_delay_ms() -> u64 {
    500
}

fn default_session_key() -> String {
    SESSION_FLAG_KEY.to_string()
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: default_loading_delay_ms(),
            curtain_open_delay_ms: default_curtain_open_delay_ms(),
            curtain_fallback_ms: None,
            session_key: default_session_key(),
        }
    }
}

impl RevealConfig {
    /// Loading intro duration
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    /// Curtain open delay
    pub fn curtain_open_delay(&self) -> Duration {
        Duration::from_millis(self.curtain_open_delay_ms)
    }

    /// Curtain completion fallback, if enabled
    pub fn curtain_fallback(&self) -> Option<Duration> {
        self.curtain_fallback_ms.map(Duration::from_millis)
    }

    /// Enable the curtain completion fallback
    pub fn with_curtain_fallback(mut self, fallback: Duration) -> Self {
        self.curtain_fallback_ms = Some(u64::try_from(fallback.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Parse from RON text
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(content)?)
    }

    /// Load from a RON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron(&content)
    }

    /// Save to a RON file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let config = ron::ser::PrettyConfig::default().struct_names(true);
        let content = ron::ser::to_string_pretty(self, config)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
