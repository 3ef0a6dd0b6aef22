//! Game session domain module.
//!
//! - `phase`: `GamePhase`, `ResumePhase`
//! - `session`: `GameSession`, the state machine driving a playthrough

mod phase;
mod session;

pub use phase::{GamePhase, ResumePhase};
pub use session::{DEFAULT_TOTAL_ROUNDS, GameSession, RoundResult};
