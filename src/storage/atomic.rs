//! Atomic file writes for generated pages.
//!
//! Content goes to a temporary file in the destination directory, is flushed,
//! and then renamed over the target. A failed write leaves no partial file
//! behind: the temporary file is removed when it is dropped.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::{SiteError, SiteResult};

/// Write `contents` to `path` atomically, creating parent directories as needed.
///
/// # Errors
/// Returns `SiteError::Output` naming `path` if any step fails.
pub fn write_atomic(path: &Path, contents: &[u8]) -> SiteResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.exists() {
        std::fs::create_dir_all(parent)
            .map_err(|e| SiteError::output(parent, format!("failed to create directory: {e}")))?;
    }

    let mut tmp = NamedTempFile::new_in(parent)
        .map_err(|e| SiteError::output(path, format!("failed to create temp file: {e}")))?;
    tmp.write_all(contents)
        .map_err(|e| SiteError::output(path, format!("failed to write: {e}")))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| SiteError::output(path, format!("failed to flush: {e}")))?;
    tmp.persist(path)
        .map_err(|e| SiteError::output(path, format!("failed to persist: {}", e.error)))?;

    Ok(())
}
