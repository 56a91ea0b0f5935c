use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HivsimError, Result};

/// A request to elevate a session to the `pro` role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRequest {
    /// Identity of the session that asked for the upgrade.
    pub identity: String,
    /// When the request was enqueued.
    pub requested_at: DateTime<Utc>,
}

/// Single-slot queue of pending upgrade requests.
///
/// Only one session exists per client instance, so the queue holds zero or
/// one entries. Enqueueing overwrites: last write wins.
#[derive(Debug, Default)]
pub struct ApprovalQueue {
    slot: Option<ApprovalRequest>,
}

impl ApprovalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a request for `identity`, replacing any existing entry.
    pub fn enqueue(&mut self, identity: impl Into<String>) -> &ApprovalRequest {
        let request = ApprovalRequest {
            identity: identity.into(),
            requested_at: Utc::now(),
        };
        if let Some(replaced) = &self.slot {
            tracing::debug!("[ApprovalQueue] Overwriting request of {}", replaced.identity);
        }
        self.slot.insert(request)
    }

    /// Removes and returns the entry for `identity`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the queue is empty or holds another identity;
    /// the queue is left untouched in that case.
    pub fn consume(&mut self, identity: &str) -> Result<ApprovalRequest> {
        match self.slot.take() {
            Some(request) if request.identity == identity => Ok(request),
            other => {
                self.slot = other;
                Err(HivsimError::not_found("approval_request", identity))
            }
        }
    }

    /// Lists the pending requests for the admin surface (0 or 1 entries).
    pub fn pending(&self) -> Vec<ApprovalRequest> {
        self.slot.iter().cloned().collect()
    }

    /// Drops any pending entry.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
