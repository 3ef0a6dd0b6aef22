//! Candidate and pick domain models.

use crate::error::{Result, SwipeError};
use serde::{Deserialize, Serialize};

/// One image available for a pick.
///
/// Identity is the `name`. Two candidates with the same name are the same
/// contender for scoring and persistence, whatever their URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Opaque resource locator of the image
    pub url: String,
    /// Unique display/identity key
    pub name: String,
}

impl Candidate {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }
}

/// A resolved round: the candidate the player chose and the one passed over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    pub winner: Candidate,
    pub loser: Candidate,
}

impl Pick {
    /// Builds a pick, rejecting missing or equal identities.
    pub fn new(winner: Candidate, loser: Candidate) -> Result<Self> {
        validate_pair(&winner.name, &loser.name)?;
        Ok(Self { winner, loser })
    }
}

/// Checks that a winner/loser pair names two distinct, non-empty identities.
pub fn validate_pair(winner_name: &str, loser_name: &str) -> Result<()> {
    if winner_name.trim().is_empty() || loser_name.trim().is_empty() {
        return Err(SwipeError::invalid_input(
            "winner and loser must both have a name",
        ));
    }
    if winner_name == loser_name {
        return Err(SwipeError::invalid_input(format!(
            "winner and loser are the same candidate '{}'",
            winner_name
        )));
    }
    Ok(())
}
