//! Application layer for hivsim.
//!
//! This crate provides the use case that composes the domain components into
//! the client's user actions, plus the notices shown for their outcomes.

pub mod notice;
pub mod simulator_usecase;

pub use notice::{Notice, NoticeLevel};
pub use simulator_usecase::{RunReport, SimulatorUseCase};
