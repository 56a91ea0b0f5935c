//! Role-upgrade approval domain module.
//!
//! - `queue`: the single-slot [`ApprovalQueue`] of pending [`ApprovalRequest`]s

mod queue;

pub use queue::{ApprovalQueue, ApprovalRequest};
