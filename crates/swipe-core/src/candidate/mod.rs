//! Candidate domain module.
//!
//! - `model`: `Candidate` and `Pick`
//! - `pool`: `CandidatePool`, random matchup drawing
//! - `repository`: roster source trait

mod model;
mod pool;
mod repository;

pub use model::{Candidate, Pick, validate_pair};
pub use pool::CandidatePool;
pub use repository::RosterRepository;
