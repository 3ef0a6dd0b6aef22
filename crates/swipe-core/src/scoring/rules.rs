//! Point values and the head-to-head decision rule.

use serde::{Deserialize, Serialize};

/// Awarded when the pick agrees with the historical majority.
pub const MAJORITY_POINTS: u32 = 100;
/// Awarded when the pick goes against the historical majority.
pub const UNDERDOG_POINTS: u32 = 25;
/// Awarded on an even record, including a first-ever matchup.
pub const TIE_POINTS: u32 = 50;
/// Awarded when the store could not be consulted.
pub const FAIL_OPEN_POINTS: u32 = 50;
/// Awarded when no store is attached at all.
pub const UNCONFIGURED_POINTS: u32 = 0;

/// Prior results between the two candidates of a pick, seen from the winner's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadToHead {
    /// Past records where this pick's winner beat this pick's loser
    pub winner_wins: u64,
    /// Past records where this pick's loser beat this pick's winner
    pub loser_wins: u64,
}

impl HeadToHead {
    pub fn new(winner_wins: u64, loser_wins: u64) -> Self {
        Self {
            winner_wins,
            loser_wins,
        }
    }

    /// Classifies the pick against the prior record.
    ///
    /// No history and a genuine tie fall in the same branch.
    pub fn basis(&self) -> ScoreBasis {
        match self.winner_wins.cmp(&self.loser_wins) {
            std::cmp::Ordering::Greater => ScoreBasis::Majority,
            std::cmp::Ordering::Less => ScoreBasis::Underdog,
            std::cmp::Ordering::Equal => ScoreBasis::Tie,
        }
    }

    pub fn points(&self) -> u32 {
        self.basis().points()
    }
}

/// Why a pick was worth what it was worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBasis {
    Majority,
    Underdog,
    Tie,
    FailOpen,
    Unconfigured,
}

impl ScoreBasis {
    pub fn points(self) -> u32 {
        match self {
            ScoreBasis::Majority => MAJORITY_POINTS,
            ScoreBasis::Underdog => UNDERDOG_POINTS,
            ScoreBasis::Tie => TIE_POINTS,
            ScoreBasis::FailOpen => FAIL_OPEN_POINTS,
            ScoreBasis::Unconfigured => UNCONFIGURED_POINTS,
        }
    }
}

impl std::fmt::Display for ScoreBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ScoreBasis::Majority => "picked the crowd favorite",
            ScoreBasis::Underdog => "picked the underdog",
            ScoreBasis::Tie => "even matchup",
            ScoreBasis::FailOpen => "popularity unavailable",
            ScoreBasis::Unconfigured => "no popularity signal",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_over_count_grid() {
        for winner_wins in 0..8u64 {
            for loser_wins in 0..8u64 {
                let points = HeadToHead::new(winner_wins, loser_wins).points();
                let expected = if winner_wins > loser_wins {
                    100
                } else if winner_wins < loser_wins {
                    25
                } else {
                    50
                };
                assert_eq!(points, expected, "counts {winner_wins} vs {loser_wins}");
            }
        }
    }

    #[test]
    fn test_first_matchup_is_a_tie() {
        let h2h = HeadToHead::new(0, 0);
        assert_eq!(h2h.basis(), ScoreBasis::Tie);
        assert_eq!(h2h.points(), 50);
    }
}
