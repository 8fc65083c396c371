//! Atomic file writes.
//!
//! Every generated file goes through [`atomic_write`]: content is written to a
//! sibling temporary file, synced, then renamed over the destination. A crash
//! mid-run leaves either the old file or the new one, never a truncated mix.
//!
//! `std::fs::rename` replaces an existing destination on every supported
//! platform; atomicity holds when temp file and target share a filesystem,
//! which a sibling temp file guarantees.
//!
//! On crash a temporary file named `.{filename}.tmp` may remain next to the target.

use crate::error::{Result, ScaffoldError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// # Errors
///
/// * `ScaffoldError::Execution` - directory creation, write, sync or rename failed
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            ScaffoldError::Execution(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;
    atomic_replace(&temp_path, path)
}

/// Sibling temp path: `.{filename}.tmp`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ScaffoldError::Execution(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        ScaffoldError::Execution(format!("failed to create '{}': {}", path.display(), e))
    })?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(ScaffoldError::Execution(format!(
            "failed to write '{}': {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        ScaffoldError::Execution(format!("failed to replace '{}': {}", target.display(), e))
    })?;

    // Persist the directory entry.
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}
