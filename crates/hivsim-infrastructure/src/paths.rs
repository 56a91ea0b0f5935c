//! Path management for hivsim configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/hivsim/            # Config directory (platform config dir on macOS/Windows)
//! └── config.toml              # Application configuration
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "hivsim";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find configuration directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct HivsimPaths;

impl HivsimPaths {
    /// Returns the hivsim configuration directory (e.g. `~/.config/hivsim/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_is_inside_app_dir() {
        // Headless CI may have no config dir at all.
        if let (Ok(dir), Ok(file)) = (HivsimPaths::config_dir(), HivsimPaths::config_file()) {
            assert!(dir.ends_with(APP_DIR));
            assert_eq!(file.parent(), Some(dir.as_path()));
            assert!(file.ends_with("config.toml"));
        }
    }
}
