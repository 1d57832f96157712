//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Roster has no players")]
    EmptyRoster,

    #[error("Duplicate player name: {0}")]
    DuplicatePlayer(String),

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Expected a '{expected}' response, got '{actual}'")]
    SchemaMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("'{target}' is not one of the allowed targets ({allowed})")]
    InvalidTarget { target: String, allowed: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Cannot resolve an empty ballot")]
    EmptyBallot,
}

impl DomainError {
    /// Whether this error was caused by a participant producing output
    /// outside its allowed schema
    pub fn is_invalid_output(&self) -> bool {
        matches!(
            self,
            DomainError::SchemaMismatch { .. }
                | DomainError::InvalidTarget { .. }
                | DomainError::MalformedResponse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_target_display() {
        let error = DomainError::InvalidTarget {
            target: "Mallory".to_string(),
            allowed: "Alice, Bob".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "'Mallory' is not one of the allowed targets (Alice, Bob)"
        );
    }

    #[test]
    fn test_is_invalid_output() {
        assert!(DomainError::MalformedResponse("x".to_string()).is_invalid_output());
        assert!(
            DomainError::SchemaMismatch {
                expected: "vote",
                actual: "speech"
            }
            .is_invalid_output()
        );
        assert!(!DomainError::EmptyRoster.is_invalid_output());
        assert!(!DomainError::EmptyBallot.is_invalid_output());
    }
}
