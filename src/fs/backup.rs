//! Pre-overwrite backups.

use super::atomic::atomic_write;
use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::{Path, PathBuf};

/// Copy an existing destination file into the backup tree.
///
/// `relative` is the destination's path relative to the target directory;
/// the copy lands at `<backup_root>/<relative>`. Returns the backup path.
///
/// # Errors
///
/// * `ScaffoldError::Execution` - the original cannot be read or the copy cannot be written
pub fn backup_file(original: &Path, backup_root: &Path, relative: &Path) -> Result<PathBuf> {
    let content = fs::read(original).map_err(|e| {
        ScaffoldError::Execution(format!(
            "failed to read '{}' for backup: {}",
            original.display(),
            e
        ))
    })?;

    let backup_path = backup_root.join(relative);
    atomic_write(&backup_path, &content)?;
    Ok(backup_path)
}
