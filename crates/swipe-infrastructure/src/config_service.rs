//! Configuration service implementation.
//!
//! Loads `GameConfig` from `config.toml`, layers environment overrides on
//! top, and caches the result.

use crate::paths::SwipePaths;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use swipe_core::config::GameConfig;
use swipe_core::error::{Result, SwipeError};

pub const ENV_TOTAL_ROUNDS: &str = "SWIPE_TOTAL_ROUNDS";
pub const ENV_USER_ID: &str = "SWIPE_USER_ID";
pub const ENV_STORE_BACKEND: &str = "SWIPE_STORE_BACKEND";
pub const ENV_STORE_PATH: &str = "SWIPE_STORE_PATH";
pub const ENV_ROSTER_PATH: &str = "SWIPE_ROSTER_PATH";

/// Configuration service that loads and caches the game configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration, filled on first access.
    config: Arc<RwLock<Option<GameConfig>>>,
}

impl ConfigService {
    /// Uses the default `config.toml` location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(SwipePaths::config_file()?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading it on first call.
    pub fn get_config(&self) -> Result<GameConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(cached) = read_lock.as_ref() {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load(|key| std::env::var(key).ok())?;

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Reads the file (defaults when it is missing), applies overrides from
    /// `env`, and validates.
    pub fn load<F>(&self, env: F) -> Result<GameConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            toml::from_str::<GameConfig>(&content).map_err(|e| {
                SwipeError::config(format!("Invalid {}: {}", self.path.display(), e))
            })?
        } else {
            tracing::info!(
                "No config file at {}, using defaults",
                self.path.display()
            );
            GameConfig::default()
        };

        apply_env_overrides(&mut config, env)?;
        config.validate()?;
        Ok(config)
    }
}

/// Overrides fields of `config` from environment-style variables.
pub fn apply_env_overrides<F>(config: &mut GameConfig, env: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = env(ENV_TOTAL_ROUNDS) {
        config.total_rounds = value.trim().parse().map_err(|e| {
            SwipeError::config(format!("Invalid {ENV_TOTAL_ROUNDS} value '{value}': {e}"))
        })?;
    }
    if let Some(value) = env(ENV_USER_ID) {
        config.user_id = value;
    }
    if let Some(value) = env(ENV_STORE_BACKEND) {
        config.store.backend = value.parse()?;
    }
    if let Some(value) = env(ENV_STORE_PATH) {
        config.store.path = Some(PathBuf::from(value));
    }
    if let Some(value) = env(ENV_ROSTER_PATH) {
        config.roster_path = Some(PathBuf::from(value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use swipe_core::config::StoreBackend;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        let config = service.load(no_env).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_file_then_env_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "total_rounds = 5\nuser_id = \"from-file\"\n[store]\nbackend = \"memory\"\n",
        )
        .unwrap();

        let env: HashMap<&str, &str> =
            HashMap::from([(ENV_USER_ID, "from-env"), (ENV_STORE_BACKEND, "file")]);
        let config = ConfigService::with_path(path)
            .load(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.total_rounds, 5);
        assert_eq!(config.user_id, "from-env");
        assert_eq!(config.store.backend, StoreBackend::File);
    }

    #[test]
    fn test_bad_override_is_config_error() {
        let mut config = GameConfig::default();
        let err = apply_env_overrides(&mut config, |key| {
            (key == ENV_TOTAL_ROUNDS).then(|| "many".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, SwipeError::Config(_)));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "total_rounds = \"ten\"").unwrap();
        let err = ConfigService::with_path(path).load(no_env).unwrap_err();
        assert!(matches!(err, SwipeError::Config(_)));
    }

    #[test]
    fn test_zero_rounds_fail_validation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "total_rounds = 0").unwrap();
        assert!(ConfigService::with_path(path).load(no_env).is_err());
    }
}
