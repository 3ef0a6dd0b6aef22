//! Outcome record domain model.

use crate::candidate::Pick;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted fact recording one completed pick.
///
/// Records are append-only. Taken together they define the head-to-head
/// win count for every ordered pair of candidate names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub winner_name: String,
    pub loser_name: String,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
}

impl OutcomeRecord {
    pub fn new(
        winner_name: impl Into<String>,
        loser_name: impl Into<String>,
        user_id: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            winner_name: winner_name.into(),
            loser_name: loser_name.into(),
            user_id: user_id.into(),
            timestamp,
        }
    }

    /// Records `pick` for `user_id` at the current instant.
    pub fn from_pick(pick: &Pick, user_id: impl Into<String>) -> Self {
        Self::new(
            pick.winner.name.clone(),
            pick.loser.name.clone(),
            user_id,
            Utc::now(),
        )
    }

    /// True when this record is a win of `winner_name` over `loser_name`.
    pub fn is_head_to_head(&self, winner_name: &str, loser_name: &str) -> bool {
        self.winner_name == winner_name && self.loser_name == loser_name
    }
}
