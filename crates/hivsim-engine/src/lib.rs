//! Reference simulation engine.
//!
//! Implements the HIV dynamics model behind the `/simulate` protocol so the
//! client can be run and tested without an external service.

pub mod model;
pub mod server;

pub use model::simulate;
pub use server::{router, serve};
