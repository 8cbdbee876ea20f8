//! Filesystem helpers for durable writes.
//!
//! The manifest is the single source of truth for package identity, so it
//! is written atomically: content goes to a temp file in the same
//! directory, is synced, and then renamed over the target. Generated
//! boilerplate uses plain writes; losing a half-written scaffold file is
//! recoverable by re-running the task.

use crate::error::{RepokitError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            RepokitError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;
    replace(&temp_path, path)?;

    Ok(())
}

/// Plain (non-atomic) write with parent directory creation.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            RepokitError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    fs::write(path, content).map_err(|e| {
        RepokitError::UserError(format!("failed to write '{}': {}", path.display(), e))
    })
}

/// Append a string to a file, creating it if absent.
pub fn append_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            RepokitError::UserError(format!(
                "failed to open '{}' for append: {}",
                path.display(),
                e
            ))
        })?;

    file.write_all(content.as_bytes()).map_err(|e| {
        RepokitError::UserError(format!("failed to append to '{}': {}", path.display(), e))
    })
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| RepokitError::UserError("invalid file path".to_string()))?;
    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        RepokitError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        RepokitError::UserError(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        RepokitError::UserError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

#[cfg(unix)]
fn replace(source: &Path, target: &Path) -> Result<()> {
    // rename() is atomic on POSIX and replaces an existing destination.
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        RepokitError::UserError(format!("failed to replace '{}': {}", target.display(), e))
    })
}

#[cfg(windows)]
fn replace(source: &Path, target: &Path) -> Result<()> {
    // Windows rename fails if the destination exists; remove it first.
    // This loses atomicity on the replace path, which is acceptable for a
    // single-operator interactive tool.
    if target.exists() {
        fs::remove_file(target).map_err(|e| {
            let _ = fs::remove_file(source);
            RepokitError::UserError(format!("failed to remove '{}': {}", target.display(), e))
        })?;
    }
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        RepokitError::UserError(format!("failed to replace '{}': {}", target.display(), e))
    })
}
