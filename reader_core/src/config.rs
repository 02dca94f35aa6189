//! Reader configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Timings and storage settings of the reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Time the exit animation gets before the page changes.
    pub exit_delay_ms: u64,

    /// Time the new page gets to finish entering before input is accepted again.
    pub settle_delay_ms: u64,

    /// Key under which the history is persisted.
    pub history_key: String,

    /// Directory prefix for node sound references.
    pub sound_dir: String,

    /// Whether node clips loop until the page changes.
    pub loop_sounds: bool,

    /// Initial mute preference.
    pub muted: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            exit_delay_ms: 300,
            settle_delay_ms: 50,
            history_key: "story-history".to_string(),
            sound_dir: "sounds".to_string(),
            loop_sounds: true,
            muted: false,
        }
    }
}

impl ReaderConfig {
    /// Parse a configuration from TOML; missing fields keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}
