//! Casual/professional mode gating.
//!
//! - `gate`: the pure authorization decision (`ModeGate`, `EffectiveMode`)
//! - `switch`: the toggle state kept consistent with that decision (`ModeSwitch`)

mod gate;
mod switch;

pub use gate::{EffectiveMode, ModeGate};
pub use switch::ModeSwitch;
