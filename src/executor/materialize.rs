//! Per-artifact materialization and the per-file conflict policy.

use super::types::{ConflictDecision, ConflictHandler, ExecutionResult};
use crate::config::{OverwritePolicy, ResolvedConfig};
use crate::context::TemplateContext;
use crate::error::{Result, ScaffoldError};
use crate::fs::{atomic_write, backup_file, list_files};
use crate::plan::{PlannedArtifact, PlannedSource};
use crate::template::{self, TemplateKind};
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// State for one plan run.
pub(super) struct Materializer<'c, 'o> {
    pub(super) config: &'c ResolvedConfig,
    pub(super) cwd: &'o Path,
    pub(super) templates_root: &'o Path,
    pub(super) on_conflict: Option<ConflictHandler<'o>>,
    pub(super) context: TemplateContext,
    pub(super) result: ExecutionResult,
    /// Destinations written or backed up during this run.
    pub(super) touched: HashSet<PathBuf>,
}

impl Materializer<'_, '_> {
    pub(super) fn materialize(&mut self, artifact: &PlannedArtifact) -> Result<()> {
        tracing::debug!(
            artifact = %artifact.id,
            kind = artifact.source.kind(),
            "materializing"
        );

        match &artifact.source {
            PlannedSource::StaticDir { from, to_dir } => {
                let source_root = self.templates_root.join(from);
                for relative in list_files(&source_root)? {
                    let content = read_bytes(&source_root.join(&relative))?;
                    self.write(&Path::new(to_dir).join(&relative), &content)?;
                }
            }
            PlannedSource::TemplateFile {
                from,
                to_dir,
                out_file,
            } => {
                let source = self.templates_root.join(from);
                let kind = file_name(Path::new(from))
                    .and_then(TemplateKind::detect)
                    .unwrap_or(TemplateKind::Text);
                let rendered = self.render(&artifact.id, &source, kind)?;
                self.write(&Path::new(to_dir).join(out_file), rendered.as_bytes())?;
            }
            PlannedSource::TemplateDir { from_dir, to_dir } => {
                let source_root = self.templates_root.join(from_dir);
                for relative in list_files(&source_root)? {
                    let source = source_root.join(&relative);
                    let name = file_name(&relative);
                    let kind = name.and_then(TemplateKind::detect);
                    let out_name = name.and_then(template::strip_template_marker);
                    match kind.zip(out_name) {
                        Some((kind, out_name)) => {
                            let rendered = self.render(&artifact.id, &source, kind)?;
                            let dest = Path::new(to_dir).join(relative.with_file_name(out_name));
                            self.write(&dest, rendered.as_bytes())?;
                        }
                        None => {
                            let content = read_bytes(&source)?;
                            self.write(&Path::new(to_dir).join(&relative), &content)?;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&self, artifact_id: &str, source: &Path, kind: TemplateKind) -> Result<String> {
        let bytes = read_bytes(source)?;
        let raw = String::from_utf8(bytes).map_err(|_| {
            ScaffoldError::TemplateRender(format!(
                "artifact '{}': '{}' is not valid UTF-8",
                artifact_id,
                source.display()
            ))
        })?;

        template::render(kind, &raw, &self.context).map_err(|e| {
            ScaffoldError::TemplateRender(format!(
                "artifact '{}': '{}': {}",
                artifact_id,
                source.display(),
                e
            ))
        })
    }

    /// Write one destination file, applying the conflict policy.
    ///
    /// A destination is backed up at most once per run, and never after this
    /// run has already written it, so the backup always holds the file that
    /// was there before the run started.
    fn write(&mut self, relative: &Path, content: &[u8]) -> Result<()> {
        let dest = self.cwd.join(relative);
        let shown = display_relative(relative);

        if dest.exists() {
            if self.decide(&shown) == ConflictDecision::Skip {
                tracing::info!(path = %shown, "skipped existing file");
                self.result.skipped += 1;
                return Ok(());
            }

            if self.config.backup_enabled && !self.touched.contains(&dest) {
                let backup_root = self.cwd.join(&self.config.backup_dir);
                let backup = backup_file(&dest, &backup_root, relative)?;
                tracing::debug!(path = %shown, backup = %backup.display(), "backed up");
                self.result.backed_up += 1;
            }
        }

        atomic_write(&dest, content)?;
        tracing::info!(path = %shown, "wrote file");
        self.touched.insert(dest);
        self.result.written += 1;
        Ok(())
    }

    fn decide(&mut self, shown: &str) -> ConflictDecision {
        match self.config.effective_overwrite {
            OverwritePolicy::Skip => ConflictDecision::Skip,
            OverwritePolicy::Force => ConflictDecision::Overwrite,
            OverwritePolicy::Prompt => match self.on_conflict.as_deref_mut() {
                Some(ask) => ask(shown),
                None => ConflictDecision::Skip,
            },
        }
    }
}

/// Prefix execution errors with the artifact being applied.
pub(super) fn with_artifact(id: &str, err: ScaffoldError) -> ScaffoldError {
    match err {
        ScaffoldError::Execution(msg) => {
            ScaffoldError::Execution(format!("artifact '{}': {}", id, msg))
        }
        other => other,
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| {
        ScaffoldError::Execution(format!("failed to read '{}': {}", path.display(), e))
    })
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

/// Relative path with `/` separators on every platform.
pub(super) fn display_relative(path: &Path) -> String {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
