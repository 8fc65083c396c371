//! Stored config loading.

use super::model::StoredConfig;
use super::types::STORED_CONFIG_FILE;
use crate::error::{Result, ScaffoldError};
use std::path::Path;

impl StoredConfig {
    /// Load the stored config from a JSON file.
    ///
    /// # Returns
    ///
    /// * `Ok(StoredConfig::default())` - The file does not exist
    /// * `Ok(StoredConfig)` - Successfully parsed config
    /// * `Err(ScaffoldError::Configuration)` - Unreadable file or malformed JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no stored config, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::Configuration(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content).map_err(|e| match e {
            ScaffoldError::Configuration(msg) => {
                ScaffoldError::Configuration(format!("{} (in '{}')", msg, path.display()))
            }
            other => other,
        })
    }

    /// Load `.sdd-scaffold.json` from the given project directory.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::load(dir.as_ref().join(STORED_CONFIG_FILE))
    }

    /// Parse the stored config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            ScaffoldError::Configuration(format!("failed to parse config JSON: {}", e))
        })
    }
}
