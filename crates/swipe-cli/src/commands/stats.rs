use anyhow::{Context, Result};
use std::sync::Arc;
use swipe_application::StatsService;
use swipe_core::outcome::OutcomeRepository;
use swipe_core::stats::PlayerStats;

pub async fn run(user_id: &str, store: Option<Arc<dyn OutcomeRepository>>) -> Result<()> {
    let service = StatsService::new(store);
    let stats = service
        .player_stats(user_id)
        .await
        .with_context(|| format!("Failed to load stats for '{}'", user_id))?;

    println!("📊 Stats for {}", user_id);
    print_stats(&stats);
    Ok(())
}

pub fn print_stats(stats: &PlayerStats) {
    println!("   Total battles: {}", stats.total_battles);
    if stats.top_champions.is_empty() {
        println!("   No champions yet. Play a game first!");
        return;
    }

    println!("   Top champions:");
    for (rank, champion) in stats.top_champions.iter().enumerate() {
        println!(
            "   {}. {:<24} picked {:>3}x   global win rate {}",
            rank + 1,
            champion.name,
            champion.picks,
            champion.win_rate_label()
        );
    }
}
