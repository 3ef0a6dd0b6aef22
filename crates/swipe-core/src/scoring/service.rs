use super::rules::{HeadToHead, ScoreBasis};
use crate::candidate::{Candidate, validate_pair};
use crate::error::{Result, SwipeError};
use crate::outcome::OutcomeRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// The scored value of one pick, with the reasoning behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub points: u32,
    pub basis: ScoreBasis,
    /// Present only when the store answered both queries
    pub head_to_head: Option<HeadToHead>,
}

/// Turns a pick into points from the aggregate history of past picks.
///
/// Without a store the scorer runs in "no popularity signal" mode and every
/// pick is worth 0. With a store, any failure to read both counts (error or
/// timeout) is logged and the pick is worth 50; scoring never blocks play.
///
/// The scorer only reads. Appending the pick is the caller's job and must
/// happen after scoring, so a pick never counts towards its own score.
#[derive(Clone)]
pub struct PopularityScorer {
    store: Option<Arc<dyn OutcomeRepository>>,
    lookup_timeout: Option<Duration>,
}

impl PopularityScorer {
    /// Creates a scorer backed by `store`.
    pub fn new(store: Arc<dyn OutcomeRepository>) -> Self {
        Self {
            store: Some(store),
            lookup_timeout: None,
        }
    }

    /// Creates a scorer with no store attached.
    pub fn unconfigured() -> Self {
        Self {
            store: None,
            lookup_timeout: None,
        }
    }

    pub fn from_store(store: Option<Arc<dyn OutcomeRepository>>) -> Self {
        match store {
            Some(store) => Self::new(store),
            None => Self::unconfigured(),
        }
    }

    /// Bounds the head-to-head lookup; elapsing counts as a store failure.
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = Some(timeout);
        self
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_some()
    }

    /// Returns the points `winner` earns for being picked over `loser`.
    ///
    /// # Errors
    ///
    /// Only `SwipeError::InvalidInput`, for missing or equal names. Store
    /// failures are absorbed.
    pub async fn score(&self, winner: &Candidate, loser: &Candidate) -> Result<u32> {
        Ok(self.assess(winner, loser).await?.points)
    }

    /// Like [`score`](Self::score), but also reports how the value was reached.
    pub async fn assess(&self, winner: &Candidate, loser: &Candidate) -> Result<Assessment> {
        validate_pair(&winner.name, &loser.name)?;

        let Some(store) = self.store.as_ref() else {
            tracing::debug!(target: "scoring", "No outcome store attached, scoring 0");
            return Ok(Assessment {
                points: ScoreBasis::Unconfigured.points(),
                basis: ScoreBasis::Unconfigured,
                head_to_head: None,
            });
        };

        match self.lookup(store.as_ref(), &winner.name, &loser.name).await {
            Ok(h2h) => {
                let basis = h2h.basis();
                tracing::debug!(
                    target: "scoring",
                    "{} over {}: {} vs {} -> {} ({})",
                    winner.name,
                    loser.name,
                    h2h.winner_wins,
                    h2h.loser_wins,
                    basis.points(),
                    basis
                );
                Ok(Assessment {
                    points: basis.points(),
                    basis,
                    head_to_head: Some(h2h),
                })
            }
            Err(e) => {
                tracing::warn!(
                    target: "scoring",
                    "Could not calculate popular vote score for {} over {}: {}",
                    winner.name,
                    loser.name,
                    e
                );
                Ok(Assessment {
                    points: ScoreBasis::FailOpen.points(),
                    basis: ScoreBasis::FailOpen,
                    head_to_head: None,
                })
            }
        }
    }

    async fn lookup(
        &self,
        store: &dyn OutcomeRepository,
        winner_name: &str,
        loser_name: &str,
    ) -> Result<HeadToHead> {
        let counts = async {
            tokio::try_join!(
                store.count_head_to_head(winner_name, loser_name),
                store.count_head_to_head(loser_name, winner_name),
            )
        };

        let (winner_wins, loser_wins) = match self.lookup_timeout {
            Some(timeout) => tokio::time::timeout(timeout, counts).await.map_err(|_| {
                SwipeError::store_unavailable(format!(
                    "head-to-head lookup timed out after {}ms",
                    timeout.as_millis()
                ))
            })??,
            None => counts.await?,
        };

        Ok(HeadToHead::new(winner_wins, loser_wins))
    }
}

impl std::fmt::Debug for PopularityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopularityScorer")
            .field("configured", &self.is_configured())
            .field("lookup_timeout", &self.lookup_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::OutcomeRecord;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Mock OutcomeRepository with fixed head-to-head counts
    struct FixedCounts {
        counts: HashMap<(String, String), u64>,
        fail_on: Option<(String, String)>,
        delay: Option<Duration>,
        queries: AtomicUsize,
        appended: Mutex<Vec<OutcomeRecord>>,
    }

    impl FixedCounts {
        fn new(entries: &[(&str, &str, u64)]) -> Self {
            Self {
                counts: entries
                    .iter()
                    .map(|(w, l, n)| ((w.to_string(), l.to_string()), *n))
                    .collect(),
                fail_on: None,
                delay: None,
                queries: AtomicUsize::new(0),
                appended: Mutex::new(Vec::new()),
            }
        }

        fn failing_on(mut self, winner: &str, loser: &str) -> Self {
            self.fail_on = Some((winner.to_string(), loser.to_string()));
            self
        }

        fn delayed(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }
    }

    #[async_trait]
    impl OutcomeRepository for FixedCounts {
        async fn count_head_to_head(&self, winner_name: &str, loser_name: &str) -> Result<u64> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            let key = (winner_name.to_string(), loser_name.to_string());
            if self.fail_on.as_ref() == Some(&key) {
                return Err(SwipeError::store_unavailable("connection reset"));
            }
            Ok(self.counts.get(&key).copied().unwrap_or(0))
        }

        async fn append(&self, record: OutcomeRecord) -> Result<()> {
            self.appended.lock().unwrap().push(record);
            Ok(())
        }

        async fn list_by_user(&self, _user_id: &str) -> Result<Vec<OutcomeRecord>> {
            Ok(Vec::new())
        }

        async fn count_wins(&self, _name: &str) -> Result<u64> {
            Ok(0)
        }

        async fn count_losses(&self, _name: &str) -> Result<u64> {
            Ok(0)
        }
    }

    fn aria() -> Candidate {
        Candidate::new("Aria", "https://img/aria.png")
    }

    fn bex() -> Candidate {
        Candidate::new("Bex", "https://img/bex.png")
    }

    #[tokio::test]
    async fn test_majority_pick_scores_100() {
        let scorer = PopularityScorer::new(Arc::new(FixedCounts::new(&[
            ("Aria", "Bex", 3),
            ("Bex", "Aria", 1),
        ])));
        let assessment = scorer.assess(&aria(), &bex()).await.unwrap();
        assert_eq!(assessment.points, 100);
        assert_eq!(assessment.basis, ScoreBasis::Majority);
        assert_eq!(assessment.head_to_head, Some(HeadToHead::new(3, 1)));
    }

    #[tokio::test]
    async fn test_underdog_pick_scores_25() {
        let scorer = PopularityScorer::new(Arc::new(FixedCounts::new(&[
            ("Aria", "Bex", 1),
            ("Bex", "Aria", 4),
        ])));
        assert_eq!(scorer.score(&aria(), &bex()).await.unwrap(), 25);
    }

    #[tokio::test]
    async fn test_even_and_empty_history_score_50() {
        let tied = PopularityScorer::new(Arc::new(FixedCounts::new(&[
            ("Aria", "Bex", 2),
            ("Bex", "Aria", 2),
        ])));
        assert_eq!(tied.score(&aria(), &bex()).await.unwrap(), 50);

        let fresh = PopularityScorer::new(Arc::new(FixedCounts::new(&[])));
        assert_eq!(fresh.score(&aria(), &bex()).await.unwrap(), 50);
    }

    #[tokio::test]
    async fn test_counts_are_directional() {
        // Wins against a third candidate do not count toward the pair
        let scorer = PopularityScorer::new(Arc::new(FixedCounts::new(&[
            ("Aria", "Cyd", 9),
            ("Bex", "Aria", 1),
        ])));
        assert_eq!(scorer.score(&aria(), &bex()).await.unwrap(), 25);
    }

    #[tokio::test]
    async fn test_failed_query_fails_open_to_50() {
        // Winner-side count would say majority; the failing reverse count must win out
        let store = FixedCounts::new(&[("Aria", "Bex", 5)]).failing_on("Bex", "Aria");
        let scorer = PopularityScorer::new(Arc::new(store));
        let assessment = scorer.assess(&aria(), &bex()).await.unwrap();
        assert_eq!(assessment.points, 50);
        assert_eq!(assessment.basis, ScoreBasis::FailOpen);
        assert!(assessment.head_to_head.is_none());
    }

    #[tokio::test]
    async fn test_slow_store_times_out_to_50() {
        let store = FixedCounts::new(&[("Aria", "Bex", 5)]).delayed(Duration::from_secs(5));
        let scorer = PopularityScorer::new(Arc::new(store))
            .with_lookup_timeout(Duration::from_millis(20));
        let assessment = scorer.assess(&aria(), &bex()).await.unwrap();
        assert_eq!(assessment.basis, ScoreBasis::FailOpen);
        assert_eq!(assessment.points, 50);
    }

    #[tokio::test]
    async fn test_unconfigured_always_scores_0() {
        let scorer = PopularityScorer::unconfigured();
        assert!(!scorer.is_configured());
        let assessment = scorer.assess(&aria(), &bex()).await.unwrap();
        assert_eq!(assessment.points, 0);
        assert_eq!(assessment.basis, ScoreBasis::Unconfigured);
        assert_eq!(scorer.score(&bex(), &aria()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_invalid_input_fails_fast_without_querying() {
        let store = Arc::new(FixedCounts::new(&[]));
        let scorer = PopularityScorer::new(store.clone());
        let err = scorer.score(&aria(), &aria()).await.unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(store.queries.load(Ordering::SeqCst), 0);

        let err = PopularityScorer::unconfigured()
            .score(&aria(), &Candidate::new("", "https://img/x.png"))
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_scorer_never_appends() {
        let store = Arc::new(FixedCounts::new(&[]));
        let scorer = PopularityScorer::new(store.clone());
        scorer.score(&aria(), &bex()).await.unwrap();
        assert!(store.appended.lock().unwrap().is_empty());
        assert_eq!(store.queries.load(Ordering::SeqCst), 2);
    }
}
