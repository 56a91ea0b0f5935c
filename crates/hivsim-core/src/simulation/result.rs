use serde::{Deserialize, Serialize};

/// Time series returned by the simulation engine.
///
/// All four sequences share the index of `time`. Alignment is the engine's
/// responsibility and is not re-checked by the client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationResult {
    pub time: Vec<f64>,
    /// Healthy T cells.
    #[serde(rename = "T")]
    pub t: Vec<f64>,
    /// Viral load.
    #[serde(rename = "V")]
    pub v: Vec<f64>,
    /// Latent reservoir.
    #[serde(rename = "L")]
    pub l: Vec<f64>,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}
