//! Draws the pair shown each round.

use swipe_core::candidate::{Candidate, CandidatePool, RosterRepository};
use swipe_core::error::Result;

pub struct MatchupService {
    pool: CandidatePool,
}

impl MatchupService {
    pub fn new(pool: CandidatePool) -> Self {
        Self { pool }
    }

    /// Loads the roster and rejects it up front if no matchup can be drawn.
    pub async fn from_roster(roster: &dyn RosterRepository) -> Result<Self> {
        let pool = CandidatePool::new(roster.list_candidates().await?);
        let service = Self::new(pool);
        // Fail at load time rather than on the first round
        service.next_matchup()?;
        Ok(service)
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    pub fn next_matchup(&self) -> Result<(Candidate, Candidate)> {
        self.pool.draw_pair(&mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedRoster(Vec<Candidate>);

    #[async_trait]
    impl RosterRepository for FixedRoster {
        async fn list_candidates(&self) -> Result<Vec<Candidate>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_roster_too_small() {
        let roster = FixedRoster(vec![Candidate::new("Aria", "https://img/aria.png")]);
        let err = MatchupService::from_roster(&roster).await.err().unwrap();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_matchups_come_from_roster() {
        let roster = FixedRoster(vec![
            Candidate::new("Aria", "https://img/aria.png"),
            Candidate::new("Bex", "https://img/bex.png"),
        ]);
        let service = MatchupService::from_roster(&roster).await.unwrap();
        let (left, right) = service.next_matchup().unwrap();
        let mut names = vec![left.name, right.name];
        names.sort();
        assert_eq!(names, vec!["Aria", "Bex"]);
    }
}
