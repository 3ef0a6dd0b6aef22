use super::model::Candidate;
use crate::error::{Result, SwipeError};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// The set of candidates a session draws its matchups from.
///
/// Names are unique inside a pool; later duplicates are dropped on
/// construction.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if seen.insert(candidate.name.clone()) {
                unique.push(candidate);
            } else {
                tracing::warn!("Dropping duplicate candidate '{}'", candidate.name);
            }
        }
        Self { candidates: unique }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn find(&self, name: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.name == name)
    }

    /// Draws two different candidates uniformly at random.
    pub fn draw_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(Candidate, Candidate)> {
        if self.candidates.len() < 2 {
            return Err(SwipeError::invalid_input(format!(
                "need at least 2 candidates to draw a matchup, have {}",
                self.candidates.len()
            )));
        }

        let mut drawn = self.candidates.choose_multiple(rng, 2);
        match (drawn.next(), drawn.next()) {
            (Some(left), Some(right)) => Ok((left.clone(), right.clone())),
            _ => Err(SwipeError::internal("matchup draw returned fewer than 2 candidates")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(names: &[&str]) -> CandidatePool {
        CandidatePool::new(
            names
                .iter()
                .map(|n| Candidate::new(*n, format!("https://img/{}.png", n)))
                .collect(),
        )
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        let p = pool(&["Aria", "Bex", "Aria"]);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_draw_pair_needs_two_candidates() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = pool(&["Aria"]).draw_pair(&mut rng).unwrap_err();
        assert!(err.is_invalid_input());

        let err = pool(&["Aria", "Aria"]).draw_pair(&mut rng).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_draw_pair_never_repeats_a_name() {
        let p = pool(&["Aria", "Bex", "Cyd", "Dax"]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let (left, right) = p.draw_pair(&mut rng).unwrap();
            assert_ne!(left.name, right.name);
            assert!(p.find(&left.name).is_some());
            assert!(p.find(&right.name).is_some());
        }
    }
}
