//! Data types for planned artifacts.

/// An artifact after filtering and placeholder substitution.
///
/// Produced fresh per invocation by [`super::plan`]; never mutated afterwards.
/// Dry-run printing and real execution both consume exactly this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedArtifact {
    pub id: String,
    pub source: PlannedSource,
}

/// Source kind with every path field already substituted.
///
/// Source paths are relative to the templates root; destination paths are
/// relative to the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedSource {
    StaticDir {
        from: String,
        to_dir: String,
    },
    TemplateFile {
        from: String,
        to_dir: String,
        /// Resolved output file name inside `to_dir`.
        out_file: String,
    },
    TemplateDir {
        from_dir: String,
        to_dir: String,
    },
}

impl PlannedSource {
    /// Manifest name of this source kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PlannedSource::StaticDir { .. } => "staticDir",
            PlannedSource::TemplateFile { .. } => "templateFile",
            PlannedSource::TemplateDir { .. } => "templateDir",
        }
    }

    /// Source path relative to the templates root.
    pub fn source_path(&self) -> &str {
        match self {
            PlannedSource::StaticDir { from, .. } => from,
            PlannedSource::TemplateFile { from, .. } => from,
            PlannedSource::TemplateDir { from_dir, .. } => from_dir,
        }
    }

    /// Destination relative to the target directory: a directory for tree
    /// kinds, the output file for `TemplateFile`.
    pub fn destination(&self) -> String {
        match self {
            PlannedSource::StaticDir { to_dir, .. } => to_dir.clone(),
            PlannedSource::TemplateFile {
                to_dir, out_file, ..
            } => join_relative(to_dir, out_file),
            PlannedSource::TemplateDir { to_dir, .. } => to_dir.clone(),
        }
    }
}

/// Join two `/`-separated relative path strings.
fn join_relative(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() || dir == "." {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}
