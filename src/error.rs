//! Error types for the sdd-scaffold CLI.
//!
//! Uses thiserror for derive macros. Every variant carries a single-line,
//! user-actionable message naming the offending field, file or artifact.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for scaffolding operations.
///
/// Configuration and manifest errors are raised before anything touches the
/// target directory. Execution errors abort the remaining plan; files already
/// written stay on disk.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Invalid enumerated value, unsafe path, or conflicting agent selection.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Manifest file missing, not JSON, or not the expected shape/version.
    #[error("manifest error: {0}")]
    Manifest(String),

    /// Template content did not render (e.g. JSON invalid after substitution).
    #[error("template render error: {0}")]
    TemplateRender(String),

    /// Filesystem operation failed while applying a plan.
    #[error("execution error: {0}")]
    Execution(String),
}

impl ScaffoldError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::Configuration(_) => exit_codes::USER_ERROR,
            ScaffoldError::Manifest(_) => exit_codes::USER_ERROR,
            ScaffoldError::TemplateRender(_) => exit_codes::USER_ERROR,
            ScaffoldError::Execution(_) => exit_codes::EXECUTION_FAILURE,
        }
    }
}

/// Result type alias for scaffolding operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
