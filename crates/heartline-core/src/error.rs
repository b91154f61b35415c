//! Error types for the Heartline client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::subscription::{Feature, Tier};

/// A shared error type for every Heartline crate.
///
/// Variants are grouped by how the caller is expected to react:
/// `Validation` is user-correctable and shown inline, `Transient` can be
/// retried, `Session` ends the current flow.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HeartlineError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A user-supplied value was rejected
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// A gated action was attempted without the required tier
    #[error("{feature} requires the {required} plan")]
    Entitlement { feature: Feature, required: Tier },

    /// Backend hiccup; the same request may succeed later
    #[error("Temporary backend failure: {0}")]
    Transient(String),

    /// Authentication or session failure
    #[error("Session error: {0}")]
    Session(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HeartlineError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Creates a Validation error for a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn entitlement(feature: Feature, required: Tier) -> Self {
        Self::Entitlement { feature, required }
    }

    pub fn transient(message: impl Into<String>) -> Self {
        Self::Transient(message.into())
    }

    pub fn session(message: impl Into<String>) -> Self {
        Self::Session(message.into())
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

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_entitlement(&self) -> bool {
        matches!(self, Self::Entitlement { .. })
    }

    /// True when repeating the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient(_))
    }

    /// True when the current flow cannot continue and the user must start over.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Session(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for HeartlineError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for HeartlineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for HeartlineError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for HeartlineError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, HeartlineError>`.
pub type Result<T> = std::result::Result<T, HeartlineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(HeartlineError::transient("timeout").is_retryable());
        assert!(!HeartlineError::transient("timeout").is_fatal());
        assert!(HeartlineError::session("token expired").is_fatal());
        assert!(HeartlineError::validation("name", "required").is_validation());
        assert!(HeartlineError::not_found("profile", 7).is_not_found());
    }

    #[test]
    fn test_entitlement_message() {
        let err = HeartlineError::entitlement(Feature::VideoChat, Tier::Premium);
        assert_eq!(err.to_string(), "Video Chat requires the premium plan");
    }

    #[test]
    fn test_from_toml_error() {
        let err: HeartlineError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        match err {
            HeartlineError::Serialization { format, .. } => assert_eq!(format, "TOML"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
