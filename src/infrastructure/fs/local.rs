//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use ignore::WalkBuilder;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult, WalkEntry};
use crate::domain::value_objects::ListingOrder;

/// Local file system implementation
///
/// Writes go through a temp file in the destination folder and are renamed
/// into place, so a failed write never leaves a truncated file behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

/// Write `content` to `path` via tempfile + rename
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| FsError::at(dir, e))?;
    tmp.write_all(content).map_err(|e| FsError::at(path, e))?;
    tmp.as_file().sync_all().map_err(|e| FsError::at(path, e))?;

    // Temp files are created 0600; keep the old mode, or use a plain 0644.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(path)
            .map(|m| m.permissions().mode())
            .unwrap_or(0o644);
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(mode))
            .map_err(|e| FsError::at(path, e))?;
    }

    tmp.persist(path).map_err(|e| FsError::at(path, e.error))?;
    Ok(())
}

impl FileSystem for LocalFs {
    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        tracing::debug!(path = %path.display(), bytes = content.len(), "writing file");
        atomic_write(path, content.as_bytes())
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn walk(&self, root: &Path, order: ListingOrder) -> FsResult<Vec<WalkEntry>> {
        if !root.is_dir() {
            return Err(FsError::NotFound(root.to_path_buf()));
        }

        // Every file is listed: no hidden-file or ignore-file filtering.
        let mut builder = WalkBuilder::new(root);
        builder.standard_filters(false).follow_links(true);
        if order == ListingOrder::ByName {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }

        let mut entries = Vec::new();
        for result in builder.build() {
            let entry = result.map_err(|e| walk_error(root, e))?;

            if entry.depth() == 0 {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| FsError::Walk(e.to_string()))?
                .to_path_buf();
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());

            tracing::trace!(path = %relative.display(), is_dir, "discovered");
            entries.push(WalkEntry { relative, is_dir });
        }

        Ok(entries)
    }
}

/// Attach the offending entry's path, not the walk root, to a walk failure
fn walk_error(path: &Path, err: ignore::Error) -> FsError {
    match err {
        ignore::Error::WithPath { path, err } => walk_error(&path, *err),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error(path, *err)
        }
        ignore::Error::Io(io) => FsError::at(path, io),
        other => FsError::Walk(other.to_string()),
    }
}
