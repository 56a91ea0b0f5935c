use super::gate::{EffectiveMode, ModeGate};
use crate::error::Result;
use crate::session::Session;

/// Presentation-side state of the professional-mode toggle.
///
/// Every change is routed through [`ModeGate`] so the toggle never shows
/// "on" while the decision is casual.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModeSwitch {
    on: bool,
}

impl ModeSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Applies a toggle interaction.
    ///
    /// On refusal the switch is forced off before the error is returned.
    pub fn set(&mut self, session: &Session, requested_on: bool) -> Result<EffectiveMode> {
        match ModeGate::authorize(session, requested_on) {
            Ok(mode) => {
                self.on = mode == EffectiveMode::Professional;
                Ok(mode)
            }
            Err(err) => {
                self.on = false;
                Err(err)
            }
        }
    }

    /// Re-evaluates the current switch position for a run.
    ///
    /// A stale "on" position held by a session that is no longer allowed is
    /// reset and resolved to casual.
    pub fn resolve(&mut self, session: &Session) -> EffectiveMode {
        match self.set(session, self.on) {
            Ok(mode) => mode,
            Err(err) => {
                tracing::warn!("[ModeSwitch] Falling back to casual parameters: {}", err);
                EffectiveMode::Casual
            }
        }
    }

    pub fn reset(&mut self) {
        self.on = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    fn session(role: Role) -> Session {
        Session {
            identity: "a@b.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_refusal_forces_switch_off() {
        let mut switch = ModeSwitch::new();
        let err = switch.set(&session(Role::Casual), true).unwrap_err();
        assert!(err.is_unauthorized_elevation());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_pro_can_turn_on_and_off() {
        let mut switch = ModeSwitch::new();
        let pro = session(Role::Pro);

        assert_eq!(switch.set(&pro, true), Ok(EffectiveMode::Professional));
        assert!(switch.is_on());

        assert_eq!(switch.set(&pro, false), Ok(EffectiveMode::Casual));
        assert!(!switch.is_on());
    }

    #[test]
    fn test_refusal_regardless_of_history() {
        let mut switch = ModeSwitch { on: true };
        let err = switch.set(&session(Role::Pending), true).unwrap_err();
        assert!(err.is_unauthorized_elevation());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_resolve_resets_stale_position() {
        let mut switch = ModeSwitch { on: true };
        assert_eq!(switch.resolve(&session(Role::Casual)), EffectiveMode::Casual);
        assert!(!switch.is_on());

        let mut switch = ModeSwitch { on: true };
        assert_eq!(switch.resolve(&session(Role::Pro)), EffectiveMode::Professional);
        assert!(switch.is_on());
    }
}
