pub mod config_service;
pub mod memory_outcome_repository;
pub mod paths;
pub mod storage;
pub mod toml_outcome_repository;
pub mod toml_roster_repository;

pub use crate::config_service::ConfigService;
pub use crate::memory_outcome_repository::InMemoryOutcomeRepository;
pub use crate::paths::SwipePaths;
pub use crate::toml_outcome_repository::TomlOutcomeRepository;
pub use crate::toml_roster_repository::TomlRosterRepository;
