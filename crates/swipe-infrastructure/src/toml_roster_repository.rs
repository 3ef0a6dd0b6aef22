//! Roster loaded from a TOML file.
//!
//! ```toml
//! [[candidate]]
//! name = "Aria"
//! url = "https://cdn.example.com/aria.png"
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use swipe_core::candidate::{Candidate, RosterRepository};
use swipe_core::error::{Result, SwipeError};

#[derive(Debug, Default, Serialize, Deserialize)]
struct RosterDocument {
    #[serde(default, rename = "candidate")]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Clone)]
pub struct TomlRosterRepository {
    path: PathBuf,
}

impl TomlRosterRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl RosterRepository for TomlRosterRepository {
    async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SwipeError::Io {
                message: format!("Failed to read roster {}: {}", self.path.display(), e),
            }
        })?;
        let document: RosterDocument = toml::from_str(&content)?;

        let mut candidates = Vec::with_capacity(document.candidates.len());
        for candidate in document.candidates {
            if candidate.name.trim().is_empty() {
                tracing::warn!("Skipping roster entry with empty name (url: {})", candidate.url);
                continue;
            }
            candidates.push(candidate);
        }

        tracing::info!(
            "Loaded {} candidate(s) from {}",
            candidates.len(),
            self.path.display()
        );
        Ok(candidates)
    }
}
