//! Player statistics service.

use futures::future::try_join_all;
use std::sync::Arc;
use swipe_core::error::{Result, SwipeError};
use swipe_core::outcome::OutcomeRepository;
use swipe_core::stats::{ChampionStat, PlayerStats, TOP_CHAMPIONS, rank_champions};

/// Builds the stats view for a player.
///
/// Unlike scoring, stats do not fail open: without a store this returns
/// `NotConfigured`, and store failures propagate for the view to display.
pub struct StatsService {
    outcomes: Option<Arc<dyn OutcomeRepository>>,
}

impl StatsService {
    pub fn new(outcomes: Option<Arc<dyn OutcomeRepository>>) -> Self {
        Self { outcomes }
    }

    pub async fn player_stats(&self, user_id: &str) -> Result<PlayerStats> {
        let outcomes = self.outcomes.as_ref().ok_or(SwipeError::NotConfigured)?;

        let records = outcomes.list_by_user(user_id).await?;
        if records.is_empty() {
            return Ok(PlayerStats::default());
        }

        let ranked = rank_champions(&records, TOP_CHAMPIONS);
        let top_champions = try_join_all(
            ranked
                .into_iter()
                .map(|champion| with_global_record(outcomes.as_ref(), champion)),
        )
        .await?;

        tracing::debug!(
            "Stats for {}: {} battles, {} champion(s)",
            user_id,
            records.len(),
            top_champions.len()
        );

        Ok(PlayerStats {
            total_battles: records.len() as u64,
            top_champions,
        })
    }
}

async fn with_global_record(
    outcomes: &dyn OutcomeRepository,
    champion: ChampionStat,
) -> Result<ChampionStat> {
    let (wins, losses) = tokio::try_join!(
        outcomes.count_wins(&champion.name),
        outcomes.count_losses(&champion.name),
    )?;
    Ok(champion.with_global_record(wins, losses))
}
