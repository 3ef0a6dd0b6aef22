//! Application layer for Swipe Battle.
//!
//! Use cases that coordinate the domain core with whatever outcome store
//! and roster the composition root wires in.

pub mod game_usecase;
pub mod matchup_service;
pub mod stats_service;

pub use game_usecase::{GameUseCase, PickReport};
pub use matchup_service::MatchupService;
pub use stats_service::StatsService;
