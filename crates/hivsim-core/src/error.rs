//! Error types for the hivsim client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::Role;

/// A shared error type for the entire hivsim workspace.
///
/// Every variant is recoverable: the caller surfaces a notice and hands
/// control back to the user.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HivsimError {
    /// Registration input failed the identity format check.
    #[error("Invalid identity: '{identity}'")]
    InvalidIdentity { identity: String },

    /// Professional mode was requested by a session that is not `pro`.
    #[error("Professional mode requires the pro role (current role: {role})")]
    UnauthorizedElevation { role: Role },

    /// Approval was requested for an identity with no pending session.
    #[error("No pending session matches '{identity}'")]
    NoMatchingPendingSession { identity: String },

    /// A (role, event) pair that is not part of the transition table.
    #[error("Role transition rejected: {event} is not allowed from {from}")]
    InvalidTransition { from: Role, event: String },

    /// An action that needs a registered session ran before registration.
    #[error("No active session")]
    NoActiveSession,

    /// A user-supplied simulation parameter was rejected before submission.
    #[error("Invalid parameter {field}: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    /// The simulate call failed at the network, status or decoding level.
    #[error("Transport failure: {message}")]
    TransportFailure { message: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HivsimError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidIdentity error
    pub fn invalid_identity(identity: impl Into<String>) -> Self {
        Self::InvalidIdentity {
            identity: identity.into(),
        }
    }

    /// Creates a NoMatchingPendingSession error
    pub fn no_matching_pending_session(identity: impl Into<String>) -> Self {
        Self::NoMatchingPendingSession {
            identity: identity.into(),
        }
    }

    /// Creates an InvalidParameter error
    pub fn invalid_parameter(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Creates a TransportFailure error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportFailure {
            message: message.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_invalid_identity(&self) -> bool {
        matches!(self, Self::InvalidIdentity { .. })
    }

    pub fn is_unauthorized_elevation(&self) -> bool {
        matches!(self, Self::UnauthorizedElevation { .. })
    }

    pub fn is_no_matching_pending_session(&self) -> bool {
        matches!(self, Self::NoMatchingPendingSession { .. })
    }

    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::TransportFailure { .. })
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for HivsimError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for HivsimError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for HivsimError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, HivsimError>`.
pub type Result<T> = std::result::Result<T, HivsimError>;
