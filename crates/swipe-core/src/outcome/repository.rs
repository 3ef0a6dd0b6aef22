//! Outcome repository trait.
//!
//! Defines the shared append-and-count store that backs popularity scoring
//! and player stats.

use super::model::OutcomeRecord;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store of outcome records.
///
/// The store is shared by every session. Implementations must allow
/// concurrent counts and appends from many sessions; counts are snapshots
/// and need not reflect appends that complete concurrently elsewhere.
///
/// Every failure to reach or read the backing store should be reported as
/// `SwipeError::StoreUnavailable`.
#[async_trait]
pub trait OutcomeRepository: Send + Sync {
    /// Counts records where `winner_name` beat `loser_name`.
    async fn count_head_to_head(&self, winner_name: &str, loser_name: &str) -> Result<u64>;

    /// Appends a record.
    async fn append(&self, record: OutcomeRecord) -> Result<()>;

    /// Lists all records made by `user_id`, oldest first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<OutcomeRecord>>;

    /// Counts records where `name` is the winner, against anyone.
    async fn count_wins(&self, name: &str) -> Result<u64>;

    /// Counts records where `name` is the loser, against anyone.
    async fn count_losses(&self, name: &str) -> Result<u64>;
}
