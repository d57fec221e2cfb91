//! Invoker configuration persisted as JSON.

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::command::MacroPolicy;
use crate::constants::{DEFAULT_HISTORY_CAPACITY, DEFAULT_SLOT_COUNT, MIN_HISTORY_CAPACITY};
use crate::error::ConfigError;

/// Tunables for a [`CommandInvoker`](crate::CommandInvoker)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokerConfig {
    /// How many executed commands stay undoable
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Number of remote buttons
    #[serde(default = "default_slot_count")]
    pub slot_count: usize,

    /// Behaviour of macros whose members fail mid-sequence
    #[serde(default)]
    pub macro_policy: MacroPolicy,
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_slot_count() -> usize {
    DEFAULT_SLOT_COUNT
}

impl Default for InvokerConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            slot_count: DEFAULT_SLOT_COUNT,
            macro_policy: MacroPolicy::default(),
        }
    }
}

impl InvokerConfig {
    /// Clamp values the invoker cannot work with
    pub fn normalized(mut self) -> Self {
        self.history_capacity = self.history_capacity.max(MIN_HISTORY_CAPACITY);
        self.slot_count = self.slot_count.max(1);
        self
    }
}

/// Result of loading config from disk
#[derive(Debug)]
pub struct LoadConfigResult {
    pub config: InvokerConfig,
    /// Why the config was reset to defaults, if it was
    pub reset_reason: Option<String>,
}

/// Load configuration from the platform config file
pub fn load_config() -> LoadConfigResult {
    load_config_from(&crate::paths::config_file())
}

/// Load configuration from `path`, falling back to defaults.
///
/// A missing file is not an error. An unreadable or corrupted file yields
/// the defaults plus a `reset_reason` the host can show to the user.
pub fn load_config_from(path: &Path) -> LoadConfigResult {
    if !path.exists() {
        info!("No config file found at {:?}, using defaults", path);
        return LoadConfigResult {
            config: InvokerConfig::default(),
            reset_reason: None,
        };
    }

    match read_config(path) {
        Ok(config) => {
            info!("Loaded config from {:?}", path);
            LoadConfigResult {
                config: config.normalized(),
                reset_reason: None,
            }
        }
        Err(e) => {
            warn!("Failed to load config file: {}", e);
            LoadConfigResult {
                config: InvokerConfig::default(),
                reset_reason: Some(e.to_string()),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<InvokerConfig, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: PathBuf::from(path),
        source,
    })?;
    Ok(serde_json::from_str(&json)?)
}

/// Save configuration to `path` as pretty JSON
pub fn save_config(config: &InvokerConfig, path: &Path) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).map_err(|source| ConfigError::Write {
        path: PathBuf::from(path),
        source,
    })?;
    info!("Config saved to {:?}", path);
    Ok(())
}
