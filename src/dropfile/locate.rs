//! Drop file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DoorError, Result};

use super::DROP_FILE_NAME;

/// Find `door32.sys` among the immediate entries of `dir`.
///
/// Hosts disagree on case (`DOOR32.SYS`, `door32.sys`, `Door32.Sys`), so the
/// name is compared ignoring ASCII case. Subdirectories are not searched.
///
/// # Errors
///
/// Returns `DropFileUnreadable` if `dir` cannot be listed and
/// `DropFileNotFound` if no entry matches.
pub fn find_drop_file(dir: &Path) -> Result<PathBuf> {
    let entries = fs::read_dir(dir).map_err(|source| DoorError::DropFileUnreadable {
        dir: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| DoorError::DropFileUnreadable {
            dir: dir.to_path_buf(),
            source,
        })?;
        if entry
            .file_name()
            .to_string_lossy()
            .eq_ignore_ascii_case(DROP_FILE_NAME)
        {
            let path = entry.path();
            tracing::debug!("Found drop file at {}", path.display());
            return Ok(path);
        }
    }

    Err(DoorError::DropFileNotFound {
        dir: dir.to_path_buf(),
    })
}
