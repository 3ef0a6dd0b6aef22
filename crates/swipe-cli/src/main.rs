use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod bootstrap;
mod commands;

#[derive(Parser)]
#[command(name = "swipe")]
#[command(about = "Swipe Battle - pick the crowd favorite", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play {
        /// Rounds per game
        #[arg(long)]
        rounds: Option<u32>,
        /// Player id stamped on recorded picks
        #[arg(long)]
        user: Option<String>,
        /// Keep outcomes in memory for this run only
        #[arg(long)]
        memory: bool,
        /// Play without a popularity signal (every pick scores 0)
        #[arg(long, conflicts_with = "memory")]
        offline: bool,
    },
    /// Show total battles and top champions for a player
    Stats {
        #[arg(long)]
        user: Option<String>,
    },
    /// Print the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config_service = bootstrap::config_service(cli.config)?;

    match cli.command {
        Commands::Play {
            rounds,
            user,
            memory,
            offline,
        } => {
            let overrides = bootstrap::PlayOverrides {
                rounds,
                user,
                memory,
                offline,
            };
            let config = bootstrap::resolve_config(&config_service, &overrides)?;
            let store = bootstrap::build_outcome_store(&config)?;
            commands::play::run(config, store).await?
        }
        Commands::Stats { user } => {
            let config = config_service.get_config()?;
            let user = user.unwrap_or_else(|| config.user_id.clone());
            let store = bootstrap::build_outcome_store(&config)?;
            commands::stats::run(&user, store).await?
        }
        Commands::Config => commands::config::run(&config_service)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean for the game itself.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
