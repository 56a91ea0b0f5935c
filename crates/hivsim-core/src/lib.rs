//! Domain layer of the hivsim client.
//!
//! Contains the session role state machine, the approval queue, the
//! casual/professional mode gate, simulation request building, and the chart
//! rendering boundary. Network access lives behind [`simulation::SimulationEngine`].

pub mod approval;
pub mod chart;
pub mod config;
pub mod error;
pub mod mode;
pub mod session;
pub mod simulation;

// Re-export common error type
pub use error::{HivsimError, Result};
