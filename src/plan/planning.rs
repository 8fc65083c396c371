//! Artifact planning: filter, substitute, resolve output names.

use super::types::{PlannedArtifact, PlannedSource};
use crate::config::ResolvedConfig;
use crate::context::TemplateContext;
use crate::manifest::{Artifact, Manifest, SourceSpec};
use crate::template::{render_text, strip_template_marker};

/// Turn a manifest into the concrete plan for this configuration.
///
/// Artifacts whose `when` clause does not match the active agent and resolved
/// OS are dropped. Every other artifact becomes exactly one planned artifact,
/// in manifest order, with every path field substituted through `context`.
pub fn plan(
    manifest: &Manifest,
    config: &ResolvedConfig,
    context: &TemplateContext,
) -> Vec<PlannedArtifact> {
    manifest
        .artifacts
        .iter()
        .filter(|artifact| is_included(artifact, config))
        .map(|artifact| plan_artifact(artifact, context))
        .collect()
}

fn is_included(artifact: &Artifact, config: &ResolvedConfig) -> bool {
    let included = artifact
        .when
        .as_ref()
        .is_none_or(|when| when.matches(config.agent, config.resolved_os));

    if !included {
        tracing::debug!(
            artifact = %artifact.id,
            kind = artifact.source.kind(),
            agent = %config.agent,
            os = %config.resolved_os,
            "excluded by condition"
        );
    }
    included
}

fn plan_artifact(artifact: &Artifact, context: &TemplateContext) -> PlannedArtifact {
    let source = match &artifact.source {
        SourceSpec::StaticDir { from, to_dir } => PlannedSource::StaticDir {
            from: render_text(from, context),
            to_dir: render_text(to_dir, context),
        },
        SourceSpec::TemplateFile {
            from,
            to_dir,
            rename,
            out_file,
        } => {
            let from = render_text(from, context);
            let out_file = resolve_out_file(&from, rename.as_deref(), out_file.as_deref(), context);
            PlannedSource::TemplateFile {
                from,
                to_dir: render_text(to_dir, context),
                out_file,
            }
        }
        SourceSpec::TemplateDir { from_dir, to_dir } => PlannedSource::TemplateDir {
            from_dir: render_text(from_dir, context),
            to_dir: render_text(to_dir, context),
        },
    };

    tracing::debug!(
        artifact = %artifact.id,
        kind = source.kind(),
        destination = %source.destination(),
        "planned"
    );

    PlannedArtifact {
        id: artifact.id.clone(),
        source,
    }
}

/// Output file name for a `templateFile`.
///
/// Precedence: `rename`, explicit `outFile`, marker-stripped basename of
/// `from`, then the basename unchanged.
pub(crate) fn resolve_out_file(
    from: &str,
    rename: Option<&str>,
    out_file: Option<&str>,
    context: &TemplateContext,
) -> String {
    if let Some(name) = rename.or(out_file) {
        return render_text(name, context);
    }

    let base = basename(from);
    strip_template_marker(base).unwrap_or_else(|| base.to_string())
}

fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
