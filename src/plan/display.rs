//! Display and formatting of plans and execution summaries.

use super::types::PlannedArtifact;
use crate::executor::ExecutionResult;
use std::fmt::Write;

/// Kinds in the order they are grouped for display.
const KIND_ORDER: [&str; 3] = ["staticDir", "templateFile", "templateDir"];

/// Format a plan for preview.
///
/// Artifacts are grouped by kind (manifest order within a group) and each is
/// listed as `- [kind] id: source -> destination`.
pub fn format_plan(artifacts: &[PlannedArtifact]) -> String {
    let mut out = String::new();

    let counts: Vec<(&str, usize)> = KIND_ORDER
        .iter()
        .map(|kind| {
            let n = artifacts.iter().filter(|a| a.source.kind() == *kind).count();
            (*kind, n)
        })
        .collect();

    let totals = counts
        .iter()
        .map(|(kind, n)| format!("{}={}", kind, n))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "Planned artifacts: {} ({})", artifacts.len(), totals);

    if artifacts.is_empty() {
        let _ = writeln!(out, "Nothing to do.");
        return out;
    }

    for (kind, n) in counts {
        if n == 0 {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({}):", kind, n);
        for artifact in artifacts.iter().filter(|a| a.source.kind() == kind) {
            let _ = writeln!(
                out,
                "- [{}] {}: {} -> {}",
                kind,
                artifact.id,
                artifact.source.source_path(),
                artifact.source.destination()
            );
        }
    }

    out
}

/// Format a post-run summary: `written=<n>, skipped=<n>`.
pub fn format_summary(result: &ExecutionResult) -> String {
    let mut summary = format!("written={}, skipped={}", result.written, result.skipped);
    if result.backed_up > 0 {
        let _ = write!(summary, ", backed_up={}", result.backed_up);
    }
    summary
}
