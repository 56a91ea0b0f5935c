use super::model::Session;
use super::role::{Role, RoleEvent};
use crate::error::{HivsimError, Result};

/// Holds the active session, if any.
///
/// `SessionContext` is the single source of truth for authorization
/// decisions. It starts empty and is populated by [`SessionContext::register`].
#[derive(Debug, Default)]
pub struct SessionContext {
    session: Option<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `identity` as the active session with role `casual`.
    ///
    /// Any previously active session is replaced. On failure nothing is
    /// mutated.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentity` when `identity` is empty or has no `@`.
    pub fn register(&mut self, identity: &str) -> Result<&Session> {
        if !Session::is_valid_identity(identity) {
            tracing::debug!("[Session] Rejected identity: {:?}", identity);
            return Err(HivsimError::invalid_identity(identity));
        }

        if let Some(previous) = &self.session {
            tracing::info!("[Session] Replacing session of {}", previous.identity);
        }
        tracing::info!("[Session] Registered {} as {}", identity, Role::Casual);

        Ok(&*self.session.insert(Session {
            identity: identity.to_string(),
            role: Role::Casual,
        }))
    }

    /// Returns the active session, or `None` before registration.
    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns the active session or `NoActiveSession`.
    pub fn require(&self) -> Result<&Session> {
        self.current().ok_or(HivsimError::NoActiveSession)
    }

    /// Applies a role event through the transition table.
    ///
    /// Only the role state machine drives this; the role is never assigned
    /// directly.
    pub(crate) fn advance(&mut self, event: RoleEvent) -> Result<&Session> {
        let session = self.session.as_mut().ok_or(HivsimError::NoActiveSession)?;
        let next = session.role.transition(event)?;
        tracing::info!(
            "[Session] {}: {} -> {} ({})",
            session.identity,
            session.role,
            next,
            event
        );
        session.role = next;
        Ok(&*session)
    }
}
