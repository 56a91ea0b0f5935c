//! Network interaction layer.
//!
//! Provides [`SimulationClient`], the HTTP implementation of
//! [`hivsim_core::simulation::SimulationEngine`].

pub mod simulation_client;

pub use simulation_client::SimulationClient;
