//! SimulationClient - REST client for the remote simulation engine.
//!
//! Posts `SimulationParameters` to `{api_base}/simulate` and decodes the
//! returned `SimulationResult`. Connection errors, non-success statuses and
//! undecodable bodies all surface as the same `TransportFailure`.

use async_trait::async_trait;
use hivsim_core::config::{ApiSettings, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
use hivsim_core::error::{HivsimError, Result};
use hivsim_core::simulation::{SimulationEngine, SimulationParameters, SimulationResult};
use reqwest::Client;
use std::time::Duration;

/// Client that talks to the engine over HTTP.
#[derive(Clone)]
pub struct SimulationClient {
    client: Client,
    api_base: String,
    timeout: Duration,
}

impl SimulationClient {
    /// Creates a new client for `api_base` (e.g. `http://localhost:8000`).
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Creates a client from the `[api]` section of the configuration.
    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self::new(settings.base_url.clone()).with_timeout(Duration::from_secs(settings.timeout_secs))
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn simulate_url(&self) -> String {
        format!("{}/simulate", self.api_base)
    }

    /// Runs one simulation request.
    ///
    /// # Errors
    ///
    /// Returns `TransportFailure` on any network, status or decoding error.
    pub async fn run(&self, params: &SimulationParameters) -> Result<SimulationResult> {
        let url = self.simulate_url();
        tracing::debug!("[SimulationClient] POST {} {:?}", url, params);

        let response = self
            .client
            .post(&url)
            .json(params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("[SimulationClient] Request failed: {}", e);
                HivsimError::transport(format!("Simulation request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("[SimulationClient] Engine error ({}): {}", status, error_text);
            return Err(HivsimError::transport(format!(
                "Simulation engine error ({}): {}",
                status, error_text
            )));
        }

        let result = response.json::<SimulationResult>().await.map_err(|e| {
            tracing::warn!("[SimulationClient] Undecodable response: {}", e);
            HivsimError::transport(format!("Failed to parse simulation response: {}", e))
        })?;

        tracing::info!("[SimulationClient] Received {} points", result.len());
        Ok(result)
    }
}

impl Default for SimulationClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[async_trait]
impl SimulationEngine for SimulationClient {
    async fn simulate(&self, params: &SimulationParameters) -> Result<SimulationResult> {
        self.run(params).await
    }
}
