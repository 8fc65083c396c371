//! Manifest loading and structural validation.

use super::model::{MANIFEST_VERSION, Manifest, SourceSpec};
use crate::error::{Result, ScaffoldError};
use std::path::Path;

impl Manifest {
    /// Load a manifest from a JSON file.
    ///
    /// # Returns
    ///
    /// * `Ok(Manifest)` - Parsed and validated manifest
    /// * `Err(ScaffoldError::Manifest)` - Missing file, malformed JSON, wrong
    ///   shape, or unsupported version
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ScaffoldError::Manifest(format!(
                "manifest not found: '{}'",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::Manifest(format!(
                "failed to read manifest '{}': {}",
                path.display(),
                e
            ))
        })?;

        let manifest = Self::from_json(&content).map_err(|e| match e {
            ScaffoldError::Manifest(msg) => {
                ScaffoldError::Manifest(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        tracing::debug!(
            path = %path.display(),
            artifacts = manifest.artifacts.len(),
            "loaded manifest"
        );

        Ok(manifest)
    }

    /// Parse and validate a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(json)
            .map_err(|e| ScaffoldError::Manifest(format!("invalid manifest JSON: {}", e)))?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate manifest values.
    ///
    /// Validation rules:
    /// - `version` must equal [`MANIFEST_VERSION`]
    /// - every artifact `id` must be non-empty
    /// - every path field (`from`, `fromDir`, `toDir`) must be non-empty
    ///
    /// Duplicate ids are allowed; each entry plans independently.
    pub fn validate(&self) -> Result<()> {
        if self.version != MANIFEST_VERSION {
            return Err(ScaffoldError::Manifest(format!(
                "unsupported manifest version {} (expected {})",
                self.version, MANIFEST_VERSION
            )));
        }

        for (index, artifact) in self.artifacts.iter().enumerate() {
            if artifact.id.trim().is_empty() {
                return Err(ScaffoldError::Manifest(format!(
                    "artifacts[{}]: id must be non-empty",
                    index
                )));
            }

            let fields = match &artifact.source {
                SourceSpec::StaticDir { from, to_dir }
                | SourceSpec::TemplateFile { from, to_dir, .. } => {
                    [("from", from.as_str()), ("toDir", to_dir.as_str())]
                }
                SourceSpec::TemplateDir { from_dir, to_dir } => {
                    [("fromDir", from_dir.as_str()), ("toDir", to_dir.as_str())]
                }
            };

            for (name, value) in fields {
                if value.trim().is_empty() {
                    return Err(ScaffoldError::Manifest(format!(
                        "artifacts[{}] '{}': {} must be non-empty",
                        index, artifact.id, name
                    )));
                }
            }
        }

        Ok(())
    }
}
