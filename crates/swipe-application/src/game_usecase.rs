//! Game use case implementation.
//!
//! `GameUseCase` is the single entry point a front-end drives: it owns one
//! session, scores picks against the shared outcome store, appends them, and
//! feeds the result to the state machine.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use swipe_core::candidate::{Candidate, Pick};
use swipe_core::config::GameConfig;
use swipe_core::error::{Result, SwipeError};
use swipe_core::game::{GameSession, RoundResult};
use swipe_core::outcome::{OutcomeRecord, OutcomeRepository};
use swipe_core::scoring::{Assessment, PopularityScorer};
use tokio::sync::Mutex;

/// Everything a front-end needs to render after a pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickReport {
    pub assessment: Assessment,
    pub result: RoundResult,
    /// Whether the pick made it into the outcome store
    pub recorded: bool,
}

/// Use case for playing one session.
///
/// # Pick ordering
///
/// For each pick: validate, check the phase, score against the store, append
/// the pick, then apply it to the session. Scoring reads the store before
/// the append, so a pick never counts towards itself.
///
/// # Thread Safety
///
/// At most one pick is in flight. The session lock is held across the
/// scoring round trip, and a second `submit_pick` while one is pending is
/// rejected with `SwipeError::PickInFlight` instead of being queued, so
/// `round` and `score` move exactly once per accepted pick.
pub struct GameUseCase {
    session: Mutex<GameSession>,
    pick_in_flight: AtomicBool,
    scorer: PopularityScorer,
    outcomes: Option<Arc<dyn OutcomeRepository>>,
    user_id: String,
}

impl GameUseCase {
    /// Creates a use case around an existing session.
    ///
    /// # Arguments
    ///
    /// * `session` - The session to drive, normally fresh in `Start`
    /// * `scorer` - Scorer consulted for every pick
    /// * `outcomes` - Where picks are appended; `None` records nothing
    /// * `user_id` - Stamped on every appended record
    pub fn new(
        session: GameSession,
        scorer: PopularityScorer,
        outcomes: Option<Arc<dyn OutcomeRepository>>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            session: Mutex::new(session),
            pick_in_flight: AtomicBool::new(false),
            scorer,
            outcomes,
            user_id: user_id.into(),
        }
    }

    /// Builds a use case from configuration. The same store backs scoring
    /// and recording; `None` puts scoring in its always-0 mode.
    pub fn from_config(
        config: &GameConfig,
        outcomes: Option<Arc<dyn OutcomeRepository>>,
    ) -> Result<Self> {
        let mut scorer = PopularityScorer::from_store(outcomes.clone());
        if let Some(timeout) = config.store.lookup_timeout() {
            scorer = scorer.with_lookup_timeout(timeout);
        }
        let session = GameSession::new(config.total_rounds)?;
        Ok(Self::new(session, scorer, outcomes, config.user_id.clone()))
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn is_scoring_configured(&self) -> bool {
        self.scorer.is_configured()
    }

    /// A copy of the current session state.
    pub async fn snapshot(&self) -> GameSession {
        self.session.lock().await.clone()
    }

    pub async fn start_game(&self) -> Result<GameSession> {
        let mut session = self.session.lock().await;
        session.start()?;
        tracing::info!(session = %session.id(), user = %self.user_id, "Game started");
        Ok(session.clone())
    }

    /// Scores and applies one pick.
    ///
    /// # Errors
    ///
    /// - `PickInFlight` if another pick is still being scored
    /// - `InvalidInput` for missing or equal candidate names
    /// - `InvalidTransition` outside the `Playing` phase
    ///
    /// Store failures never surface here.
    pub async fn submit_pick(&self, winner: Candidate, loser: Candidate) -> Result<PickReport> {
        let _in_flight = InFlightGuard::acquire(&self.pick_in_flight)?;

        let pick = Pick::new(winner, loser)?;
        let mut session = self.session.lock().await;
        session.ensure_accepting_picks()?;

        let assessment = self.scorer.assess(&pick.winner, &pick.loser).await?;
        let recorded = self.record(&pick).await;
        let result = session.apply_pick(pick.winner, assessment.points)?;

        tracing::info!(
            session = %session.id(),
            "Round {}: +{} ({}) -> score {}",
            result.round,
            result.points,
            assessment.basis,
            result.score
        );

        Ok(PickReport {
            assessment,
            result,
            recorded,
        })
    }

    pub async fn show_winners(&self) -> Result<Vec<Candidate>> {
        let mut session = self.session.lock().await;
        session.show_winners()?;
        Ok(session.winners().to_vec())
    }

    pub async fn restart(&self) -> Result<GameSession> {
        let mut session = self.session.lock().await;
        session.restart()?;
        Ok(session.clone())
    }

    pub async fn open_stats(&self) -> Result<()> {
        self.session.lock().await.open_stats()
    }

    pub async fn close_stats(&self) -> Result<()> {
        self.session.lock().await.close_stats()
    }

    /// Appends the pick. Failures are logged and reported as `false`; they
    /// never stop the round from completing.
    async fn record(&self, pick: &Pick) -> bool {
        let Some(outcomes) = self.outcomes.as_ref() else {
            return false;
        };

        match outcomes
            .append(OutcomeRecord::from_pick(pick, self.user_id.clone()))
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    target: "outcome_store",
                    "Failed to record {} over {}: {}",
                    pick.winner.name,
                    pick.loser.name,
                    e
                );
                false
            }
        }
    }
}

/// Marks a pick as in flight until dropped.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SwipeError::PickInFlight)?;
        Ok(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
