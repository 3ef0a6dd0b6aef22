//! Outcome domain module.
//!
//! - `model`: `OutcomeRecord`
//! - `repository`: `OutcomeRepository`, the count/append store interface

mod model;
mod repository;

pub use model::OutcomeRecord;
pub use repository::OutcomeRepository;
