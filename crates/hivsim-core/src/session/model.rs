//! Session domain model.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// The single live session of a client instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Registered identity (an e-mail-like string containing `@`).
    pub identity: String,
    /// Current authorization level.
    pub role: Role,
}

impl Session {
    /// Checks the identity format accepted at registration.
    pub fn is_valid_identity(identity: &str) -> bool {
        !identity.is_empty() && identity.contains('@')
    }

    pub fn is_pro(&self) -> bool {
        self.role.is_pro()
    }
}
