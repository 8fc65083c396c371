//! Shared fixtures for unit tests.

use crate::config::{AgentId, Lang, OsType, OverwritePolicy, ResolvedConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A resolved configuration with built-in defaults on linux, customized in place.
///
/// Callers changing the overwrite policy should set `effective_overwrite` too.
pub(crate) fn resolved_config(customize: impl FnOnce(&mut ResolvedConfig)) -> ResolvedConfig {
    let agent = AgentId::ClaudeCode;
    let mut config = ResolvedConfig {
        agent,
        os: OsType::Linux,
        resolved_os: OsType::Linux,
        lang: Lang::En,
        kiro_dir: ".kiro".to_string(),
        overwrite: OverwritePolicy::Prompt,
        effective_overwrite: OverwritePolicy::Prompt,
        backup_enabled: false,
        backup_dir: String::new(),
        dry_run: false,
        layout: agent.default_layout(),
    };
    customize(&mut config);
    config
}

/// Write `files` (relative path, content) under `root`, creating directories.
pub(crate) fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// A scratch workspace with separate `templates/` and `project/` directories.
pub(crate) struct Workspace {
    _dir: TempDir,
    pub(crate) templates: PathBuf,
    pub(crate) project: PathBuf,
}

impl Workspace {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let templates = dir.path().join("templates");
        let project = dir.path().join("project");
        fs::create_dir_all(&templates).unwrap();
        fs::create_dir_all(&project).unwrap();
        Self {
            _dir: dir,
            templates,
            project,
        }
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.project.join(relative)).unwrap()
    }
}
