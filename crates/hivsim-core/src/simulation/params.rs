use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{HivsimError, Result};

pub const DEFAULT_T_MAX: u32 = 200;
pub const DEFAULT_THERAPY_START: u32 = 30;
pub const DEFAULT_RELEASE_RATE: f64 = 0.1;

/// Therapeutic payload delivered once therapy starts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
pub enum PayloadType {
    #[default]
    #[serde(rename = "siRNA")]
    #[strum(serialize = "siRNA")]
    SiRna,
    #[serde(rename = "shRNA")]
    #[strum(serialize = "shRNA")]
    ShRna,
}

/// Request body of the `/simulate` endpoint.
///
/// Fields missing from an incoming body take the casual defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Number of simulated days; the time axis is `0..t_max`.
    #[serde(deserialize_with = "whole_days")]
    pub t_max: u32,
    /// Day on which therapy begins.
    #[serde(deserialize_with = "whole_days")]
    pub therapy_start: u32,
    /// Fraction of virus cleared per day once therapy is active.
    pub release_rate: f64,
    pub payload_type: PayloadType,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            t_max: DEFAULT_T_MAX,
            therapy_start: DEFAULT_THERAPY_START,
            release_rate: DEFAULT_RELEASE_RATE,
            payload_type: PayloadType::SiRna,
        }
    }
}

impl SimulationParameters {
    /// Checks the numeric invariants (`t_max > 0`, finite `release_rate > 0`).
    pub fn validate(&self) -> Result<()> {
        if self.t_max == 0 {
            return Err(HivsimError::invalid_parameter("t_max", "must be greater than 0"));
        }
        if !self.release_rate.is_finite() || self.release_rate <= 0.0 {
            return Err(HivsimError::invalid_parameter(
                "release_rate",
                format!("must be a finite number greater than 0 (got {})", self.release_rate),
            ));
        }
        Ok(())
    }
}

/// Accepts a day count written either as an integer or as an integral
/// float (`30` or `30.0`).
fn whole_days<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(D::Error::custom(format!(
            "expected a whole, non-negative number of days, got {}",
            value
        )));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_default_wire_format() {
        let value = serde_json::to_value(SimulationParameters::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "t_max": 200,
                "therapy_start": 30,
                "release_rate": 0.1,
                "payload_type": "siRNA",
            })
        );
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let params: SimulationParameters =
            serde_json::from_value(json!({ "payload_type": "shRNA" })).unwrap();
        assert_eq!(params.t_max, DEFAULT_T_MAX);
        assert_eq!(params.therapy_start, DEFAULT_THERAPY_START);
        assert_eq!(params.payload_type, PayloadType::ShRna);
    }

    #[test]
    fn test_payload_type_names() {
        assert_eq!(PayloadType::from_str("shRNA").unwrap(), PayloadType::ShRna);
        assert_eq!(PayloadType::SiRna.to_string(), "siRNA");
        assert!(PayloadType::from_str("mRNA").is_err());
    }

    #[test]
    fn test_validate() {
        assert!(SimulationParameters::default().validate().is_ok());

        let params = SimulationParameters {
            t_max: 0,
            ..Default::default()
        };
        assert!(params.validate().unwrap_err().is_invalid_parameter());

        for rate in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let params = SimulationParameters {
                release_rate: rate,
                ..Default::default()
            };
            assert!(params.validate().is_err(), "release_rate {rate} should be rejected");
        }
    }

    #[test]
    fn test_day_fields_accept_integral_floats() {
        let params: SimulationParameters =
            serde_json::from_value(json!({ "t_max": 50.0, "therapy_start": 30.0 })).unwrap();
        assert_eq!(params.t_max, 50);
        assert_eq!(params.therapy_start, 30);

        for body in [
            json!({ "therapy_start": 30.5 }),
            json!({ "therapy_start": -1 }),
            json!({ "t_max": "200" }),
        ] {
            assert!(
                serde_json::from_value::<SimulationParameters>(body.clone()).is_err(),
                "{body} should be rejected"
            );
        }
    }
}
