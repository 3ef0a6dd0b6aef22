//! Process-local outcome repository.

use async_trait::async_trait;
use swipe_core::error::Result;
use swipe_core::outcome::{OutcomeRecord, OutcomeRepository};
use tokio::sync::RwLock;

/// Keeps outcome records in memory. Counts take a shared lock, appends an
/// exclusive one.
#[derive(Debug, Default)]
pub struct InMemoryOutcomeRepository {
    records: RwLock<Vec<OutcomeRecord>>,
}

impl InMemoryOutcomeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing history.
    pub fn with_records(records: Vec<OutcomeRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn snapshot(&self) -> Vec<OutcomeRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl OutcomeRepository for InMemoryOutcomeRepository {
    async fn count_head_to_head(&self, winner_name: &str, loser_name: &str) -> Result<u64> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.is_head_to_head(winner_name, loser_name))
            .count() as u64)
    }

    async fn append(&self, record: OutcomeRecord) -> Result<()> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<OutcomeRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn count_wins(&self, name: &str) -> Result<u64> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| r.winner_name == name).count() as u64)
    }

    async fn count_losses(&self, name: &str) -> Result<u64> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| r.loser_name == name).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_seeded_history_is_counted() {
        let repo = InMemoryOutcomeRepository::with_records(vec![
            OutcomeRecord::new("Aria", "Bex", "p1", Utc::now()),
            OutcomeRecord::new("Aria", "Bex", "p2", Utc::now()),
        ]);
        assert_eq!(repo.count_head_to_head("Aria", "Bex").await.unwrap(), 2);
        assert_eq!(repo.count_head_to_head("Bex", "Aria").await.unwrap(), 0);

        repo.append(OutcomeRecord::new("Bex", "Aria", "p1", Utc::now()))
            .await
            .unwrap();
        assert_eq!(repo.len().await, 3);
        assert_eq!(repo.list_by_user("p1").await.unwrap().len(), 2);
        assert_eq!(repo.count_wins("Bex").await.unwrap(), 1);
        assert_eq!(repo.count_losses("Bex").await.unwrap(), 2);
    }
}
