//! Domain core for Swipe Battle.
//!
//! Players see two candidates, pick one, and score points depending on
//! whether they sided with the crowd. This crate holds the pieces that do
//! not depend on any storage or front-end:
//!
//! - `candidate`: candidates, picks, random matchups
//! - `outcome`: outcome records and the store interface
//! - `scoring`: the popularity scoring rule and `PopularityScorer`
//! - `game`: the session state machine
//! - `stats`: per-player aggregation
//! - `config`: configuration models

pub mod candidate;
pub mod config;
pub mod error;
pub mod game;
pub mod outcome;
pub mod scoring;
pub mod stats;

// Re-export common error type
pub use error::SwipeError;
