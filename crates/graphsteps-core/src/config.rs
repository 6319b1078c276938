//! Engine configuration for graphsteps
//!
//! Configuration is read from `--config <path>` when given, otherwise from
//! `config.toml` in the graphsteps config directory (`~/.config/graphsteps`,
//! or `$GRAPHSTEPS_CONFIG_DIR`). A missing file yields the defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphStepsError, Result};

pub use types::{EngineConfig, OutputConfig, CONFIG_FORMAT_VERSION};

const CONFIG_DIR: &str = "graphsteps";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHSTEPS_CONFIG_DIR";

impl EngineConfig {
    /// Resolve the default configuration file path
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphStepsError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from an explicit file; the file must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GraphStepsError::read_failed(path, e))?;
        let config: EngineConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "config file is newer than this build"
            );
        }

        Ok(config)
    }

    /// Load configuration from an explicit path, or from the default location if present
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = Self::default_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load(&path)
    }
}
