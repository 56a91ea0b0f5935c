//! Simulation request/response domain module.
//!
//! # Module Structure
//!
//! - `params`: request body (`SimulationParameters`, `PayloadType`) and defaults
//! - `result`: response body (`SimulationResult`)
//! - `builder`: mode-dependent request assembly (`SimulationRequestBuilder`)
//! - `engine`: trait implemented by engine clients (`SimulationEngine`)

mod builder;
mod engine;
mod params;
mod result;

pub use builder::{ProfessionalInputs, SimulationRequestBuilder};
pub use engine::SimulationEngine;
pub use params::{
    DEFAULT_RELEASE_RATE, DEFAULT_T_MAX, DEFAULT_THERAPY_START, PayloadType, SimulationParameters,
};
pub use result::SimulationResult;
