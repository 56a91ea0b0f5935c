//! User-facing notices.
//!
//! Every outcome the presentation layer reports to the user maps to exactly
//! one fixed message here.

use hivsim_core::error::HivsimError;
use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn info(message: &str) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.to_string(),
        }
    }

    fn warning(message: &str) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.to_string(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn upgrade_requested() -> Self {
        Self::info(
            "Your request has been logged. A human will review it. Science still needs humans.",
        )
    }

    pub fn upgrade_already_requested() -> Self {
        Self::info("Pending review. Your request is already in the queue.")
    }

    pub fn already_elevated() -> Self {
        Self::info("You already have professional access.")
    }

    pub fn access_granted() -> Self {
        Self::info("Access granted. Welcome to the serious end of the pool.")
    }

    pub fn no_pending_requests() -> Self {
        Self::info("No pending researchers. Science sleeps… briefly.")
    }

    /// The notice shown for a failed operation.
    pub fn from_error(err: &HivsimError) -> Self {
        match err {
            HivsimError::InvalidIdentity { .. } => {
                Self::warning("Nice try. That’s not an email. Science requires standards.")
            }
            HivsimError::UnauthorizedElevation { .. } => {
                Self::warning("Professional mode requires approval. Patience.")
            }
            HivsimError::NoMatchingPendingSession { identity } => {
                Self::warning(&format!("No pending request for {}.", identity))
            }
            HivsimError::NoActiveSession => Self::warning("Register with your e-mail first."),
            HivsimError::InvalidParameter { field, reason } => {
                Self::warning(&format!("Check {}: {}.", field, reason))
            }
            HivsimError::TransportFailure { .. } => Self::error(
                "Backend unreachable. Either the server is down or the universe is testing us.",
            ),
            other => Self::error(other.to_string()),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hivsim_core::session::Role;

    #[test]
    fn test_transport_failures_share_one_notice() {
        let refused = Notice::from_error(&HivsimError::transport("connection refused"));
        let garbled = Notice::from_error(&HivsimError::transport("expected value at line 1"));
        assert_eq!(refused, garbled);
        assert_eq!(refused.level, NoticeLevel::Error);
    }

    #[test]
    fn test_elevation_refusal_is_a_warning() {
        let notice = Notice::from_error(&HivsimError::UnauthorizedElevation { role: Role::Pending });
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.message.contains("requires approval"));
    }

    #[test]
    fn test_parameter_notice_names_field() {
        let notice = Notice::from_error(&HivsimError::invalid_parameter(
            "release_rate",
            "'fast' is not a number",
        ));
        assert_eq!(notice.to_string(), "Check release_rate: 'fast' is not a number.");
    }

    #[test]
    fn test_invalid_identity_notice_text() {
        let notice = Notice::from_error(&HivsimError::invalid_identity("nobody"));
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(
            notice.message,
            "Nice try. That’s not an email. Science requires standards."
        );
        assert_eq!(
            Notice::upgrade_requested().message,
            "Your request has been logged. A human will review it. Science still needs humans."
        );
    }
}
