//! Session roles and the transition table between them.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{HivsimError, Result};

/// Authorization level of the active session.
///
/// Roles only ever advance: `Casual -> Pending -> Pro`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Freshly registered; default parameters only.
    #[default]
    Casual,
    /// Upgrade requested, waiting for an approver.
    Pending,
    /// Approved researcher; may submit custom parameters.
    Pro,
}

/// Triggers that move a session between roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RoleEvent {
    RequestUpgrade,
    Approve,
}

/// Legal `(from, event) -> to` transitions. Anything else is rejected.
const TRANSITIONS: &[(Role, RoleEvent, Role)] = &[
    (Role::Casual, RoleEvent::RequestUpgrade, Role::Pending),
    (Role::Pending, RoleEvent::Approve, Role::Pro),
];

impl Role {
    /// Looks up the role reached by applying `event` to `self`.
    pub fn transition(self, event: RoleEvent) -> Result<Role> {
        TRANSITIONS
            .iter()
            .find(|(from, ev, _)| *from == self && *ev == event)
            .map(|(_, _, to)| *to)
            .ok_or_else(|| HivsimError::InvalidTransition {
                from: self,
                event: event.to_string(),
            })
    }

    /// Whether this role may use professional parameters.
    pub fn is_pro(self) -> bool {
        self == Role::Pro
    }
}
