use serde::{Deserialize, Serialize};
use strum::Display;

use crate::error::{HivsimError, Result};
use crate::session::Session;

/// Resolved parameter source for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EffectiveMode {
    /// Fixed default parameters.
    #[default]
    Casual,
    /// User-supplied parameters.
    Professional,
}

/// Decides whether a session may use professional parameters.
///
/// The decision is a pure function of the session role and the requested
/// toggle state; nothing is cached between calls.
pub struct ModeGate;

impl ModeGate {
    /// Evaluates the toggle request against the session role.
    ///
    /// 1. toggle off: `Casual`.
    /// 2. toggle on, role not `pro`: `UnauthorizedElevation`.
    /// 3. toggle on, role `pro`: `Professional`.
    pub fn authorize(session: &Session, toggle_requested_on: bool) -> Result<EffectiveMode> {
        if !toggle_requested_on {
            return Ok(EffectiveMode::Casual);
        }
        if !session.is_pro() {
            return Err(HivsimError::UnauthorizedElevation { role: session.role });
        }
        Ok(EffectiveMode::Professional)
    }
}
