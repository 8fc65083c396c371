//! Plan execution: turn planned artifacts into files on disk.
//!
//! Artifacts are applied strictly in plan order, one file at a time. The
//! conflict policy is evaluated per destination file right before the write:
//!
//! - `skip`: existing files are counted as skipped and left alone
//! - `force`: existing files are overwritten, after a backup when enabled
//! - `prompt`: existing files go to the conflict handler; no handler means skip
//!
//! A failure aborts the rest of the plan. Files already written stay on disk.

mod materialize;
mod types;


pub use types::{ConflictDecision, ExecuteOptions, ExecutionResult};

use crate::config::ResolvedConfig;
use crate::context::TemplateContext;
use crate::error::Result;
use crate::plan::PlannedArtifact;
use materialize::{Materializer, with_artifact};
use std::collections::HashSet;

/// Apply a plan to the target directory.
///
/// The template context is rebuilt from `config`, so rendered contents use
/// the same values the planner used for paths.
///
/// # Errors
///
/// * `ScaffoldError::TemplateRender` - a template did not render; names the artifact and source
/// * `ScaffoldError::Execution` - a source could not be read or a destination could not be written
pub fn execute(
    artifacts: &[PlannedArtifact],
    config: &ResolvedConfig,
    options: ExecuteOptions<'_>,
) -> Result<ExecutionResult> {
    let mut materializer = Materializer {
        config,
        cwd: options.cwd,
        templates_root: options.templates_root,
        on_conflict: options.on_conflict,
        context: TemplateContext::from_config(config),
        result: ExecutionResult::default(),
        touched: HashSet::new(),
    };

    for artifact in artifacts {
        materializer
            .materialize(artifact)
            .map_err(|e| with_artifact(&artifact.id, e))?;
    }

    let result = materializer.result;
    tracing::debug!(
        written = result.written,
        skipped = result.skipped,
        backed_up = result.backed_up,
        "execution finished"
    );
    Ok(result)
}
