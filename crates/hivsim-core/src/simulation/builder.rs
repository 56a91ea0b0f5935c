use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::params::{DEFAULT_T_MAX, PayloadType, SimulationParameters};
use crate::error::{HivsimError, Result};
use crate::mode::EffectiveMode;

/// Raw professional-mode form values, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalInputs {
    pub therapy_start: String,
    pub release_rate: String,
    pub payload_type: String,
}

impl Default for ProfessionalInputs {
    fn default() -> Self {
        let defaults = SimulationParameters::default();
        Self {
            therapy_start: defaults.therapy_start.to_string(),
            release_rate: defaults.release_rate.to_string(),
            payload_type: defaults.payload_type.to_string(),
        }
    }
}

/// Produces the request body for one simulation run.
pub struct SimulationRequestBuilder;

impl SimulationRequestBuilder {
    /// Builds parameters for the resolved mode.
    ///
    /// Casual mode always yields the defaults and ignores `inputs`.
    /// Professional mode parses and validates `inputs`; `t_max` stays at
    /// its default.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for non-numeric, non-finite or
    /// out-of-range input, or an unknown payload type.
    pub fn build(mode: EffectiveMode, inputs: &ProfessionalInputs) -> Result<SimulationParameters> {
        let params = match mode {
            EffectiveMode::Casual => SimulationParameters::default(),
            EffectiveMode::Professional => SimulationParameters {
                t_max: DEFAULT_T_MAX,
                therapy_start: parse_day("therapy_start", &inputs.therapy_start)?,
                release_rate: parse_number("release_rate", &inputs.release_rate)?,
                payload_type: parse_payload(&inputs.payload_type)?,
            },
        };
        params.validate()?;
        tracing::debug!("[RequestBuilder] {} parameters: {:?}", mode, params);
        Ok(params)
    }
}

fn parse_number(field: &'static str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(HivsimError::invalid_parameter(field, "a value is required"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| HivsimError::invalid_parameter(field, format!("'{}' is not a number", trimmed)))?;
    if !value.is_finite() {
        return Err(HivsimError::invalid_parameter(field, "must be a finite number"));
    }
    Ok(value)
}

/// Parses a non-negative whole number of days.
fn parse_day(field: &'static str, text: &str) -> Result<u32> {
    let value = parse_number(field, text)?;
    if value < 0.0 {
        return Err(HivsimError::invalid_parameter(field, "must be 0 or greater"));
    }
    if value.fract() != 0.0 {
        return Err(HivsimError::invalid_parameter(field, "must be a whole number of days"));
    }
    if value > f64::from(u32::MAX) {
        return Err(HivsimError::invalid_parameter(field, "is too large"));
    }
    Ok(value as u32)
}

fn parse_payload(text: &str) -> Result<PayloadType> {
    PayloadType::from_str(text.trim()).map_err(|_| {
        HivsimError::invalid_parameter(
            "payload_type",
            format!("unsupported payload '{}' (expected siRNA or shRNA)", text.trim()),
        )
    })
}
