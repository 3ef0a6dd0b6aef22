//! Default file locations.
//!
//! ```text
//! <config_dir>/swipe-battle/      # e.g. ~/.config/swipe-battle/
//! ├── config.toml
//! └── roster.toml
//!
//! <data_dir>/swipe-battle/        # e.g. ~/.local/share/swipe-battle/
//! ├── outcomes.toml               # outcome ledger
//! └── outcomes.lock
//! ```

use std::path::PathBuf;
use swipe_core::config::GameConfig;

const APP_DIR: &str = "swipe-battle";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
    /// The platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for swipe_core::SwipeError {
    fn from(err: PathError) -> Self {
        swipe_core::SwipeError::config(err.to_string())
    }
}

pub struct SwipePaths;

impl SwipePaths {
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DataDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn default_roster_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("roster.toml"))
    }

    pub fn default_ledger_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("outcomes.toml"))
    }

    /// The ledger `config` points at, or the default one.
    pub fn ledger_file(config: &GameConfig) -> Result<PathBuf, PathError> {
        match &config.store.path {
            Some(path) => Ok(path.clone()),
            None => Self::default_ledger_file(),
        }
    }

    /// The roster `config` points at, or the default one.
    pub fn roster_file(config: &GameConfig) -> Result<PathBuf, PathError> {
        match &config.roster_path {
            Some(path) => Ok(path.clone()),
            None => Self::default_roster_file(),
        }
    }
}
