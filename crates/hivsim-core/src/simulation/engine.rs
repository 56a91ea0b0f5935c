use super::params::SimulationParameters;
use super::result::SimulationResult;
use crate::error::Result;

/// The remote computation engine, seen from the client.
///
/// Implementations perform exactly one request per call, with no queuing or
/// retry. Every failure to obtain a decoded result is reported as
/// `TransportFailure`.
#[async_trait::async_trait]
pub trait SimulationEngine: Send + Sync {
    /// Submits `params` and returns the decoded time series.
    async fn simulate(&self, params: &SimulationParameters) -> Result<SimulationResult>;
}
