//! Player statistics.
//!
//! Pure aggregation over a player's outcome records. Global win/loss counts
//! are fetched by the application layer and folded in with
//! [`ChampionStat::with_global_record`].

use crate::outcome::OutcomeRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many champions the stats view lists.
pub const TOP_CHAMPIONS: usize = 5;

/// A candidate the player picked often, with its record across all players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionStat {
    pub name: String,
    /// Times this player picked the candidate
    pub picks: u64,
    pub global_wins: u64,
    pub global_losses: u64,
}

impl ChampionStat {
    pub fn new(name: impl Into<String>, picks: u64) -> Self {
        Self {
            name: name.into(),
            picks,
            global_wins: 0,
            global_losses: 0,
        }
    }

    pub fn with_global_record(mut self, wins: u64, losses: u64) -> Self {
        self.global_wins = wins;
        self.global_losses = losses;
        self
    }

    /// Global win fraction in `0.0..=1.0`; `None` before any global game.
    pub fn win_rate(&self) -> Option<f64> {
        let total = self.global_wins + self.global_losses;
        if total == 0 {
            None
        } else {
            Some(self.global_wins as f64 / total as f64)
        }
    }

    /// Win rate as a whole percent ("67%"), or "N/A".
    pub fn win_rate_label(&self) -> String {
        match self.win_rate() {
            // Halves round up: 1 of 8 reads "13%"
            Some(rate) => format!("{}%", (rate * 100.0).round() as u64),
            None => "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub total_battles: u64,
    pub top_champions: Vec<ChampionStat>,
}

/// Groups a player's records by winner and keeps the `limit` most picked.
///
/// Ordered by pick count descending, then by name so equal counts are stable.
pub fn rank_champions(records: &[OutcomeRecord], limit: usize) -> Vec<ChampionStat> {
    let mut picks: HashMap<&str, u64> = HashMap::new();
    for record in records {
        *picks.entry(record.winner_name.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, u64)> = picks.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(name, count)| ChampionStat::new(name, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn picks(winners: &[&str]) -> Vec<OutcomeRecord> {
        winners
            .iter()
            .map(|w| OutcomeRecord::new(*w, "Someone", "player-1", Utc::now()))
            .collect()
    }

    #[test]
    fn test_rank_orders_by_picks_then_name() {
        let records = picks(&["Cyd", "Aria", "Bex", "Aria", "Cyd", "Aria"]);
        let ranked = rank_champions(&records, TOP_CHAMPIONS);
        let summary: Vec<(&str, u64)> = ranked.iter().map(|c| (c.name.as_str(), c.picks)).collect();
        assert_eq!(summary, vec![("Aria", 3), ("Cyd", 2), ("Bex", 1)]);
    }

    #[test]
    fn test_rank_truncates() {
        let records = picks(&["A", "B", "C", "D", "E", "F", "G"]);
        let ranked = rank_champions(&records, TOP_CHAMPIONS);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].name, "A");
        assert_eq!(ranked[4].name, "E");
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_champions(&[], TOP_CHAMPIONS).is_empty());
    }

    #[test]
    fn test_win_rate_label() {
        let unplayed = ChampionStat::new("Aria", 1);
        assert_eq!(unplayed.win_rate(), None);
        assert_eq!(unplayed.win_rate_label(), "N/A");

        let two_thirds = ChampionStat::new("Aria", 1).with_global_record(2, 1);
        assert_eq!(two_thirds.win_rate_label(), "67%");

        let perfect = ChampionStat::new("Aria", 1).with_global_record(4, 0);
        assert_eq!(perfect.win_rate(), Some(1.0));
        assert_eq!(perfect.win_rate_label(), "100%");
    }

    #[test]
    fn test_win_rate_label_rounds_halves_up() {
        let one_in_eight = ChampionStat::new("Aria", 1).with_global_record(1, 7);
        assert_eq!(one_in_eight.win_rate_label(), "13%");

        let five_in_eight = ChampionStat::new("Aria", 1).with_global_record(5, 3);
        assert_eq!(five_in_eight.win_rate_label(), "63%");

        let none_won = ChampionStat::new("Aria", 1).with_global_record(0, 3);
        assert_eq!(none_won.win_rate_label(), "0%");
    }
}
