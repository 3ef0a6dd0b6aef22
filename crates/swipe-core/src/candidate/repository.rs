//! Roster repository trait.

use super::model::Candidate;
use crate::error::Result;
use async_trait::async_trait;

/// Source of the candidates available to play with.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Lists every candidate in the roster, in roster order.
    async fn list_candidates(&self) -> Result<Vec<Candidate>>;
}
