//! Session phase types.

use serde::{Deserialize, Serialize};

/// The screen a session is on.
///
/// `Stats` is a side view: it carries the phase it was opened from so that
/// closing it lands exactly where the player left off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum GamePhase {
    /// Waiting for the player to start a game.
    Start,
    /// Rounds are being played.
    Playing,
    /// All rounds are done; final score is shown.
    End,
    /// The gallery of this session's picks.
    Winners,
    /// Player stats, opened on top of another phase.
    Stats {
        /// Where `close_stats` returns to.
        return_to: ResumePhase,
    },
}

/// Phases the stats view can be opened from and return to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumePhase {
    Start,
    Playing,
    End,
    Winners,
}

impl From<ResumePhase> for GamePhase {
    fn from(phase: ResumePhase) -> Self {
        match phase {
            ResumePhase::Start => GamePhase::Start,
            ResumePhase::Playing => GamePhase::Playing,
            ResumePhase::End => GamePhase::End,
            ResumePhase::Winners => GamePhase::Winners,
        }
    }
}

impl GamePhase {
    /// The resumable form of this phase, `None` for `Stats`.
    pub fn as_resume(self) -> Option<ResumePhase> {
        match self {
            GamePhase::Start => Some(ResumePhase::Start),
            GamePhase::Playing => Some(ResumePhase::Playing),
            GamePhase::End => Some(ResumePhase::End),
            GamePhase::Winners => Some(ResumePhase::Winners),
            GamePhase::Stats { .. } => None,
        }
    }

    /// True once all rounds are played and only restart leads back to play.
    pub fn is_finished(self) -> bool {
        matches!(self, GamePhase::End | GamePhase::Winners)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Start => "start",
            GamePhase::Playing => "playing",
            GamePhase::End => "end",
            GamePhase::Winners => "winners",
            GamePhase::Stats { .. } => "stats",
        };
        f.write_str(name)
    }
}
