//! Popularity scoring.
//!
//! - `rules`: point constants and the head-to-head decision rule (pure)
//! - `service`: `PopularityScorer`, which consults the outcome store

mod rules;
mod service;

pub use rules::{
    FAIL_OPEN_POINTS, HeadToHead, MAJORITY_POINTS, ScoreBasis, TIE_POINTS, UNCONFIGURED_POINTS,
    UNDERDOG_POINTS,
};
pub use service::{Assessment, PopularityScorer};
