//! Session domain module.
//!
//! This module contains the session model, the role enumeration with its
//! transition table, and the state machine that drives role changes.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`)
//! - `role`: Roles and the transition table (`Role`, `RoleEvent`)
//! - `context`: Holder of the active session (`SessionContext`)
//! - `state_machine`: Upgrade request and approval (`RoleStateMachine`)
//!
//! # Usage
//!
//! ```ignore
//! use hivsim_core::session::{Session, SessionContext, Role};
//! use hivsim_core::session::{RoleStateMachine, UpgradeOutcome};
//! ```

mod context;
mod model;
mod role;
mod state_machine;

// Re-export public API
pub use context::SessionContext;
pub use model::Session;
pub use role::{Role, RoleEvent};
pub use state_machine::{RoleStateMachine, UpgradeOutcome};
