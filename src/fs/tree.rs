//! Recursive directory listing.

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::{Path, PathBuf};

/// List every regular file under `root`, recursively.
///
/// Returned paths are relative to `root` and sorted, so callers materialize
/// trees in the same order on every platform. Symlinked files are followed;
/// symlinked directories are skipped, so a link cycle cannot recurse.
///
/// # Errors
///
/// * `ScaffoldError::Execution` - `root` is not a directory or cannot be read
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ScaffoldError::Execution(format!(
            "source directory not found: '{}'",
            root.display()
        )));
    }

    let mut files = Vec::new();
    collect(root, Path::new(""), &mut files)?;
    files.sort();
    Ok(files)
}

fn collect(root: &Path, relative: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let dir = root.join(relative);
    let entries = fs::read_dir(&dir).map_err(|e| {
        ScaffoldError::Execution(format!(
            "failed to read directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            ScaffoldError::Execution(format!(
                "failed to read directory entry in '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let file_type = entry.file_type().map_err(|e| {
            ScaffoldError::Execution(format!(
                "failed to read file type of '{}': {}",
                entry.path().display(),
                e
            ))
        })?;

        let child = relative.join(entry.file_name());
        if file_type.is_dir() {
            collect(root, &child, files)?;
        } else if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
            files.push(child);
        }
    }

    Ok(())
}
