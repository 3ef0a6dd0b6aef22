use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use swipe_application::{GameUseCase, MatchupService, StatsService};
use swipe_core::config::GameConfig;
use swipe_core::game::GamePhase;
use swipe_core::outcome::OutcomeRepository;
use swipe_infrastructure::{SwipePaths, TomlRosterRepository};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use super::stats::print_stats;

type Input = Lines<BufReader<Stdin>>;

pub async fn run(config: GameConfig, store: Option<Arc<dyn OutcomeRepository>>) -> Result<()> {
    let roster_path = SwipePaths::roster_file(&config).context("Failed to resolve roster path")?;
    let roster = TomlRosterRepository::new(roster_path);
    let matchups = MatchupService::from_roster(&roster)
        .await
        .context("Failed to load roster")?;

    let stats = StatsService::new(store.clone());
    let game = GameUseCase::from_config(&config, store)?;
    if !game.is_scoring_configured() {
        println!("⚠️  No outcome store configured: every pick scores 0.");
    }

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("⚔️  Swipe Battle: {} rounds, playing as {}", config.total_rounds, game.user_id());
    game.start_game().await?;

    loop {
        let session = game.snapshot().await;
        match session.phase() {
            GamePhase::Start => {
                game.start_game().await?;
            }
            GamePhase::Playing => {
                let (left, right) = matchups.next_matchup()?;
                println!();
                println!(
                    "Round {}/{}   score {}",
                    session.round(),
                    session.total_rounds(),
                    session.score()
                );
                println!("  [1] {}  {}", left.name, left.url);
                println!("  [2] {}  {}", right.name, right.url);

                let Some(choice) = prompt(&mut input, "Pick 1 or 2 (s stats, q quit): ").await?
                else {
                    return Ok(());
                };
                let (winner, loser) = match choice.as_str() {
                    "1" => (left, right),
                    "2" => (right, left),
                    "s" => {
                        show_stats(&game, &stats).await?;
                        continue;
                    }
                    "q" => return Ok(()),
                    _ => {
                        println!("Type 1 or 2.");
                        continue;
                    }
                };

                let report = game.submit_pick(winner, loser).await?;
                println!(
                    "  +{} ({})   total {}",
                    report.result.points, report.assessment.basis, report.result.score
                );
            }
            GamePhase::End => {
                println!();
                println!("🏁 Game over! Final score: {}", session.score());
                let Some(choice) = prompt(&mut input, "[w] winners  [s] stats  [r] play again  [q] quit: ").await?
                else {
                    return Ok(());
                };
                match choice.as_str() {
                    "w" => {
                        game.show_winners().await?;
                    }
                    "s" => show_stats(&game, &stats).await?,
                    "r" => {
                        game.restart().await?;
                    }
                    "q" => return Ok(()),
                    _ => {}
                }
            }
            GamePhase::Winners => {
                println!();
                println!("🏆 Your picks this game:");
                for (round, winner) in session.winners().iter().enumerate() {
                    println!("  {:>2}. {}  {}", round + 1, winner.name, winner.url);
                }
                let Some(choice) = prompt(&mut input, "[s] stats  [r] play again  [q] quit: ").await?
                else {
                    return Ok(());
                };
                match choice.as_str() {
                    "s" => show_stats(&game, &stats).await?,
                    "r" => {
                        game.restart().await?;
                    }
                    "q" => return Ok(()),
                    _ => {}
                }
            }
            GamePhase::Stats { .. } => {
                game.close_stats().await?;
            }
        }
    }
}

/// Opens the stats view, prints it, and returns to the previous phase.
async fn show_stats(game: &GameUseCase, stats: &StatsService) -> Result<()> {
    game.open_stats().await?;
    println!();
    match stats.player_stats(game.user_id()).await {
        Ok(player_stats) => {
            println!("📊 Stats for {}", game.user_id());
            print_stats(&player_stats);
        }
        Err(err) if err.is_not_configured() => {
            println!("📊 Stats need an outcome store; none is configured.");
        }
        Err(err) => {
            tracing::warn!("Failed to load stats: {}", err);
            println!("📊 Stats are unavailable right now.");
        }
    }
    game.close_stats().await?;
    Ok(())
}

async fn prompt(input: &mut Input, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    std::io::stdout().flush()?;
    let line = input.next_line().await?;
    Ok(line.map(|line| line.trim().to_ascii_lowercase()))
}
