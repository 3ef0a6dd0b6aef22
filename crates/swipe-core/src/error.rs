//! Error types for Swipe Battle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole game.
///
/// Scoring recovers from `StoreUnavailable` locally and treats a missing
/// store as a mode rather than a failure, so only `InvalidInput` and the
/// state machine variants ever reach a player-facing caller during play.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeError {
    /// The outcome store could not be reached or returned garbage.
    #[error("Outcome store unavailable: {0}")]
    StoreUnavailable(String),

    /// No outcome store is attached.
    #[error("Outcome store is not configured")]
    NotConfigured,

    /// A caller broke an input contract (missing or equal identities, empty roster).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested action is not accepted in the current phase.
    #[error("Cannot {action} while in phase '{phase}'")]
    InvalidTransition { phase: String, action: String },

    /// A pick is still being scored for this session.
    #[error("A pick is already being scored")]
    PickInFlight,

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SwipeError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a StoreUnavailable error
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable(message.into())
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates an InvalidTransition error
    pub fn invalid_transition(phase: impl ToString, action: impl Into<String>) -> Self {
        Self::InvalidTransition {
            phase: phase.to_string(),
            action: action.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }

    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured)
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SwipeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SwipeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SwipeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for SwipeError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, SwipeError>`.
pub type Result<T> = std::result::Result<T, SwipeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_message() {
        let err = SwipeError::invalid_transition("start", "show winners");
        assert_eq!(err.to_string(), "Cannot show winners while in phase 'start'");
        assert!(err.is_invalid_transition());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "ledger missing");
        let err: SwipeError = io.into();
        assert!(matches!(err, SwipeError::Io { ref message } if message.contains("NotFound")));
    }
}
