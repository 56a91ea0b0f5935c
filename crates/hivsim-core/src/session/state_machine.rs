use serde::{Deserialize, Serialize};

use super::context::SessionContext;
use super::model::Session;
use super::role::{Role, RoleEvent};
use crate::approval::{ApprovalQueue, ApprovalRequest};
use crate::error::{HivsimError, Result};

/// Outcome of an upgrade request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UpgradeOutcome {
    /// The session moved to `pending` and a request was enqueued.
    Requested(ApprovalRequest),
    /// A request is already waiting for approval.
    AlreadyRequested,
    /// The session is already `pro`.
    AlreadyElevated,
}

/// Drives role changes of the active session.
///
/// Every change goes through [`Role::transition`]; the queue and the session
/// role move together so that a queued request always means `pending`.
pub struct RoleStateMachine;

impl RoleStateMachine {
    /// Requests elevation for the active session (`casual -> pending`).
    ///
    /// Asking again while `pending` or `pro` is a no-op reported through
    /// [`UpgradeOutcome`].
    ///
    /// # Errors
    ///
    /// Returns `NoActiveSession` before registration.
    pub fn request_upgrade(
        sessions: &mut SessionContext,
        queue: &mut ApprovalQueue,
    ) -> Result<UpgradeOutcome> {
        let session = sessions.require()?;
        match session.role {
            Role::Pending => return Ok(UpgradeOutcome::AlreadyRequested),
            Role::Pro => return Ok(UpgradeOutcome::AlreadyElevated),
            Role::Casual => {}
        }

        let session = sessions.advance(RoleEvent::RequestUpgrade)?;
        let request = queue.enqueue(session.identity.clone()).clone();
        tracing::info!("[RoleStateMachine] Upgrade requested by {}", request.identity);
        Ok(UpgradeOutcome::Requested(request))
    }

    /// Approves the pending request of `identity` (`pending -> pro`).
    ///
    /// Calling it again after the queue is empty fails rather than
    /// re-approving.
    ///
    /// # Errors
    ///
    /// Returns `NoMatchingPendingSession` unless the active session has this
    /// identity, is `pending`, and has a queued request. Nothing is mutated
    /// on failure.
    pub fn approve(
        sessions: &mut SessionContext,
        queue: &mut ApprovalQueue,
        identity: &str,
    ) -> Result<Session> {
        let matches = sessions
            .current()
            .is_some_and(|s| s.identity == identity && s.role == Role::Pending);
        if !matches {
            tracing::warn!("[RoleStateMachine] No pending session for {}", identity);
            return Err(HivsimError::no_matching_pending_session(identity));
        }

        queue
            .consume(identity)
            .map_err(|_| HivsimError::no_matching_pending_session(identity))?;

        let session = sessions.advance(RoleEvent::Approve)?.clone();
        tracing::info!("[RoleStateMachine] Approved {}", session.identity);
        Ok(session)
    }
}
