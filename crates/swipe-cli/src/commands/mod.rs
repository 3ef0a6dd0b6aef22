pub mod config;
pub mod play;
pub mod stats;
