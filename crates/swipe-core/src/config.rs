//! Game configuration models.
//!
//! Loaded from `config.toml` by the infrastructure `ConfigService`; every
//! field has a default so an empty or missing file is a valid configuration.

use crate::error::{Result, SwipeError};
use crate::game::DEFAULT_TOTAL_ROUNDS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_USER_ID: &str = "local-player";

/// Which outcome store backs scoring and stats.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// No store: scoring runs without a popularity signal.
    None,
    /// Process-local store, lost on exit.
    Memory,
    /// TOML ledger file shared by every process pointing at it.
    #[default]
    File,
}

impl std::str::FromStr for StoreBackend {
    type Err = SwipeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(StoreBackend::None),
            "memory" => Ok(StoreBackend::Memory),
            "file" => Ok(StoreBackend::File),
            other => Err(SwipeError::config(format!("unknown store backend '{}'", other))),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreSettings {
    #[serde(default)]
    pub backend: StoreBackend,
    /// Ledger location for the file backend; the data directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Upper bound on a head-to-head lookup before it counts as failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup_timeout_ms: Option<u64>,
}

impl StoreSettings {
    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.lookup_timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    #[serde(default = "default_total_rounds")]
    pub total_rounds: u32,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster_path: Option<PathBuf>,
    #[serde(default)]
    pub store: StoreSettings,
}

fn default_total_rounds() -> u32 {
    DEFAULT_TOTAL_ROUNDS
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_rounds: default_total_rounds(),
            user_id: default_user_id(),
            roster_path: None,
            store: StoreSettings::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.total_rounds == 0 {
            return Err(SwipeError::config("total_rounds must be at least 1"));
        }
        if self.user_id.trim().is_empty() {
            return Err(SwipeError::config("user_id must not be empty"));
        }
        if self.store.lookup_timeout_ms == Some(0) {
            return Err(SwipeError::config("store.lookup_timeout_ms must be positive"));
        }
        Ok(())
    }

    /// True when picks will be scored against a popularity signal.
    pub fn is_scoring_configured(&self) -> bool {
        self.store.backend != StoreBackend::None
    }
}
