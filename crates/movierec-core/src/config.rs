//! Configuration for movierec
//!
//! Stored as `movierec.toml` in the data directory, or passed explicitly.
//! Every field has a default, so an absent file means default settings.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{RecError, Result};

pub use types::{Config, DatasetConfig, RecommendConfig, SearchConfig};

/// File name looked up in the data directory
pub const CONFIG_FILE: &str = "movierec.toml";

/// Environment variable naming the data directory
pub const DATA_DIR_ENV_VAR: &str = "MOVIEREC_DATA_DIR";

/// Data directory used when neither flag nor environment names one
pub const DEFAULT_DATA_DIR: &str = "movielens_data/ml-25m";

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RecError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. Otherwise `<data_dir>/movierec.toml` is
    /// used when present, and defaults when not.
    pub fn resolve(explicit: Option<&Path>, data_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(RecError::not_found("config file", path.display()));
            }
            debug!(path = %path.display(), "config_explicit");
            return Self::load(path);
        }

        let implicit = data_dir.join(CONFIG_FILE);
        if implicit.exists() {
            debug!(path = %implicit.display(), "config_from_data_dir");
            return Self::load(&implicit);
        }

        debug!("config_defaults");
        Ok(Self::default())
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<()> {
        self.recommend.cohort_params().validate()
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RecError::io_operation("serialize", "config", e))
    }

    /// Title index cache directory for `data_dir`
    pub fn cache_dir(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.dataset.cache_dir)
    }
}
