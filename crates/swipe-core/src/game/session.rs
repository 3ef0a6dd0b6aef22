//! Game session state machine.

use super::phase::GamePhase;
use crate::candidate::Candidate;
use crate::error::{Result, SwipeError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rounds per game unless configured otherwise.
pub const DEFAULT_TOTAL_ROUNDS: u32 = 10;

/// What a completed pick did to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// The round the pick resolved
    pub round: u32,
    pub points: u32,
    /// Running score after the pick
    pub score: u64,
    /// Phase after the pick: `Playing`, or `End` after the final round
    pub phase: GamePhase,
}

/// One playthrough, from start to restart.
///
/// Every mutation goes through a single method per transition, and each
/// method checks the phase first. Outside `Start`:
/// - `round` stays within `1..=total_rounds`
/// - `winners.len()` equals the number of completed rounds
/// - the session is in `End` exactly when `total_rounds` picks have completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    id: String,
    phase: GamePhase,
    score: u64,
    round: u32,
    total_rounds: u32,
    winners: Vec<Candidate>,
}

impl GameSession {
    /// Creates a session in the `Start` phase.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `total_rounds` is zero.
    pub fn new(total_rounds: u32) -> Result<Self> {
        if total_rounds == 0 {
            return Err(SwipeError::invalid_input("a game needs at least one round"));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            phase: GamePhase::Start,
            score: 0,
            round: 1,
            total_rounds,
            winners: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn winners(&self) -> &[Candidate] {
        &self.winners
    }

    pub fn completed_rounds(&self) -> u32 {
        self.winners.len() as u32
    }

    /// `start -> playing`, with a fresh score, round and winner list.
    pub fn start(&mut self) -> Result<()> {
        self.expect_phase(GamePhase::Start, "start a game")?;
        self.clear_progress();
        self.phase = GamePhase::Playing;
        tracing::debug!(session = %self.id, "Game started ({} rounds)", self.total_rounds);
        Ok(())
    }

    /// Fails unless a pick may be applied right now.
    ///
    /// Callers check this before scoring so a doomed pick never reaches the store.
    pub fn ensure_accepting_picks(&self) -> Result<()> {
        self.expect_phase(GamePhase::Playing, "make a pick")
    }

    /// Applies a scored pick: adds the points, records the winner, then
    /// either advances the round or ends the game.
    pub fn apply_pick(&mut self, winner: Candidate, points: u32) -> Result<RoundResult> {
        self.ensure_accepting_picks()?;

        let round = self.round;
        self.score += u64::from(points);
        self.winners.push(winner);

        if self.round < self.total_rounds {
            self.round += 1;
        } else {
            self.phase = GamePhase::End;
            tracing::debug!(session = %self.id, "Game over with score {}", self.score);
        }

        Ok(RoundResult {
            round,
            points,
            score: self.score,
            phase: self.phase,
        })
    }

    /// `end -> winners`. Reaching `End` takes at least one pick, so the
    /// gallery is never empty.
    pub fn show_winners(&mut self) -> Result<()> {
        self.expect_phase(GamePhase::End, "show winners")?;
        self.phase = GamePhase::Winners;
        Ok(())
    }

    /// `end | winners -> start`, wiping all session data.
    pub fn restart(&mut self) -> Result<()> {
        if !self.phase.is_finished() {
            return Err(SwipeError::invalid_transition(self.phase, "restart"));
        }
        self.clear_progress();
        self.id = Uuid::new_v4().to_string();
        self.phase = GamePhase::Start;
        Ok(())
    }

    /// Opens the stats view on top of the current phase.
    pub fn open_stats(&mut self) -> Result<()> {
        let return_to = self
            .phase
            .as_resume()
            .ok_or_else(|| SwipeError::invalid_transition(self.phase, "open stats"))?;
        self.phase = GamePhase::Stats { return_to };
        Ok(())
    }

    /// Leaves the stats view, back to the phase it was opened from.
    pub fn close_stats(&mut self) -> Result<()> {
        match self.phase {
            GamePhase::Stats { return_to } => {
                self.phase = return_to.into();
                Ok(())
            }
            other => Err(SwipeError::invalid_transition(other, "close stats")),
        }
    }

    fn expect_phase(&self, expected: GamePhase, action: &str) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SwipeError::invalid_transition(self.phase, action))
        }
    }

    fn clear_progress(&mut self) {
        self.score = 0;
        self.round = 1;
        self.winners.clear();
    }
}
