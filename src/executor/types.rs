//! Data types for plan execution.

use std::path::Path;

/// Counters accumulated while applying a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Files written (new or overwritten).
    pub written: usize,
    /// Existing files left untouched.
    pub skipped: usize,
    /// Existing files copied into the backup directory before overwrite.
    pub backed_up: usize,
}

/// Answer to a conflict on an existing destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictDecision {
    Overwrite,
    Skip,
}

/// Callback asked once per conflicting destination, given its relative path.
pub type ConflictHandler<'a> = &'a mut dyn FnMut(&str) -> ConflictDecision;

/// Where and how to apply a plan.
pub struct ExecuteOptions<'a> {
    /// Target directory; destinations resolve against it.
    pub cwd: &'a Path,
    /// Directory that manifest source paths resolve against.
    pub templates_root: &'a Path,
    /// Consulted in `prompt` mode. Without one, conflicts are skipped.
    pub on_conflict: Option<ConflictHandler<'a>>,
}
