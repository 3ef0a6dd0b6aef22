//! Composition root: turns configuration into concrete services.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use swipe_core::config::{GameConfig, StoreBackend};
use swipe_core::outcome::OutcomeRepository;
use swipe_infrastructure::{ConfigService, InMemoryOutcomeRepository, SwipePaths, TomlOutcomeRepository};

/// Command-line flags that take precedence over the config file.
#[derive(Debug, Default)]
pub struct PlayOverrides {
    pub rounds: Option<u32>,
    pub user: Option<String>,
    pub memory: bool,
    pub offline: bool,
}

pub fn config_service(path: Option<PathBuf>) -> Result<ConfigService> {
    match path {
        Some(path) => Ok(ConfigService::with_path(path)),
        None => ConfigService::new().context("Failed to locate config file"),
    }
}

pub fn resolve_config(service: &ConfigService, overrides: &PlayOverrides) -> Result<GameConfig> {
    let mut config = service.get_config().context("Failed to load configuration")?;

    if let Some(rounds) = overrides.rounds {
        config.total_rounds = rounds;
    }
    if let Some(user) = &overrides.user {
        config.user_id = user.clone();
    }
    if overrides.memory {
        config.store.backend = StoreBackend::Memory;
    }
    if overrides.offline {
        config.store.backend = StoreBackend::None;
    }

    config.validate().context("Invalid command-line overrides")?;
    Ok(config)
}

/// Builds the store named by `config`, or `None` when scoring is off.
pub fn build_outcome_store(config: &GameConfig) -> Result<Option<Arc<dyn OutcomeRepository>>> {
    let store: Option<Arc<dyn OutcomeRepository>> = match config.store.backend {
        StoreBackend::None => {
            tracing::info!("Outcome store disabled, popularity scoring is off");
            None
        }
        StoreBackend::Memory => {
            tracing::info!("Using in-memory outcome store");
            Some(Arc::new(InMemoryOutcomeRepository::new()))
        }
        StoreBackend::File => {
            let path = SwipePaths::ledger_file(config).context("Failed to resolve ledger path")?;
            tracing::info!("Using outcome ledger {}", path.display());
            Some(Arc::new(TomlOutcomeRepository::new(path)))
        }
    };
    Ok(store)
}
