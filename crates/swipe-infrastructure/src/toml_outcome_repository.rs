//! File-backed outcome repository.

use crate::storage::{LedgerError, LedgerFile};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use swipe_core::error::{Result, SwipeError};
use swipe_core::outcome::{OutcomeRecord, OutcomeRepository};

/// An `OutcomeRepository` over a TOML ledger file.
///
/// Several repositories (in one process or many) may point at the same file.
/// Blocking file work runs on the tokio blocking pool. Every failure,
/// whether I/O, parse, lock or a panicked worker, is reported as
/// `SwipeError::StoreUnavailable`.
#[derive(Debug, Clone)]
pub struct TomlOutcomeRepository {
    ledger: Arc<LedgerFile>,
}

impl TomlOutcomeRepository {
    pub fn new(path: PathBuf) -> Self {
        tracing::debug!(target: "outcome_store", "Using outcome ledger at {}", path.display());
        Self {
            ledger: Arc::new(LedgerFile::new(path)),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.ledger.path()
    }

    async fn read_all(&self) -> Result<Vec<OutcomeRecord>> {
        let ledger = self.ledger.clone();
        tokio::task::spawn_blocking(move || ledger.load())
            .await
            .map_err(|e| SwipeError::store_unavailable(format!("ledger read task failed: {}", e)))?
            .map_err(into_store_error)
    }

    async fn count_where<F>(&self, predicate: F) -> Result<u64>
    where
        F: Fn(&OutcomeRecord) -> bool,
    {
        let records = self.read_all().await?;
        Ok(records.iter().filter(|&r| predicate(r)).count() as u64)
    }
}

fn into_store_error(err: LedgerError) -> SwipeError {
    SwipeError::store_unavailable(err.to_string())
}

#[async_trait]
impl OutcomeRepository for TomlOutcomeRepository {
    async fn count_head_to_head(&self, winner_name: &str, loser_name: &str) -> Result<u64> {
        self.count_where(|r| r.is_head_to_head(winner_name, loser_name))
            .await
    }

    async fn append(&self, record: OutcomeRecord) -> Result<()> {
        let ledger = self.ledger.clone();
        tokio::task::spawn_blocking(move || ledger.append(record))
            .await
            .map_err(|e| SwipeError::store_unavailable(format!("ledger append task failed: {}", e)))?
            .map_err(|e| {
                tracing::error!(target: "outcome_store", "Failed to append outcome: {}", e);
                into_store_error(e)
            })
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<OutcomeRecord>> {
        let records = self.read_all().await?;
        Ok(records.into_iter().filter(|r| r.user_id == user_id).collect())
    }

    async fn count_wins(&self, name: &str) -> Result<u64> {
        self.count_where(|r| r.winner_name == name).await
    }

    async fn count_losses(&self, name: &str) -> Result<u64> {
        self.count_where(|r| r.loser_name == name).await
    }
}
