//! Configuration service implementation.
//!
//! Loads `RootConfig` from `config.toml` and applies environment overrides:
//!
//! | variable | field |
//! |---|---|
//! | `HIVSIM_API_BASE` | `api.base_url` |
//! | `HIVSIM_TIMEOUT_SECS` | `api.timeout_secs` |
//! | `HIVSIM_LOG` | `log.level` |

use std::path::{Path, PathBuf};

use hivsim_core::config::RootConfig;
use hivsim_core::error::{HivsimError, Result};

use crate::paths::HivsimPaths;

pub const ENV_API_BASE: &str = "HIVSIM_API_BASE";
pub const ENV_TIMEOUT_SECS: &str = "HIVSIM_TIMEOUT_SECS";
pub const ENV_LOG: &str = "HIVSIM_LOG";

/// Configuration service that loads the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a service for the default config file location.
    pub fn new() -> Result<Self> {
        let path = HivsimPaths::config_file().map_err(|e| HivsimError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a service reading from an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file (defaults when missing) and applies process
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `Io`/`Serialization` for unreadable or malformed files and
    /// `Config` for malformed overrides or out-of-range values.
    pub fn load(&self) -> Result<RootConfig> {
        self.load_with(|key| std::env::var(key).ok())
    }

    fn load_with<F>(&self, lookup: F) -> Result<RootConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self.load_file()?;
        apply_overrides(&mut config, lookup)?;
        validate(&config)?;
        Ok(config)
    }

    fn load_file(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "[ConfigService] No config file at {}, using defaults",
                self.path.display()
            );
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config = toml::from_str(&content)?;
        tracing::info!("[ConfigService] Loaded {}", self.path.display());
        Ok(config)
    }
}

/// Rejects settings that would make every engine call fail.
fn validate(config: &RootConfig) -> Result<()> {
    if config.api.timeout_secs == 0 {
        return Err(HivsimError::config(format!(
            "api.timeout_secs must be at least 1 (set in config.toml or {})",
            ENV_TIMEOUT_SECS
        )));
    }
    Ok(())
}

/// Applies overrides found through `lookup` on top of `config`.
pub fn apply_overrides<F>(config: &mut RootConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_url) = lookup(ENV_API_BASE) {
        config.api.base_url = base_url;
    }
    if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
        config.api.timeout_secs = raw.trim().parse().map_err(|_| {
            HivsimError::config(format!(
                "{} must be a whole number of seconds, got '{}'",
                ENV_TIMEOUT_SECS, raw
            ))
        })?;
    }
    if let Some(level) = lookup(ENV_LOG) {
        config.log.level = level;
    }
    Ok(())
}
