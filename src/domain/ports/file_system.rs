//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the use cases write scaffolded files and walk resource folders
//! without depending on a concrete implementation (local disk, in-memory).

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ListingOrder;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File or folder not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error at a path
    Io { path: PathBuf, source: std::io::Error },
    /// Directory traversal failed
    Walk(String),
}

impl FsError {
    /// Classify an I/O error that happened at `path`
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io { path, source } => {
                write!(f, "I/O error at {}: {}", path.display(), source)
            }
            FsError::Walk(msg) => write!(f, "Failed to read folder: {}", msg),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// One item found while walking a folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Path relative to the walk root
    pub relative: PathBuf,
    pub is_dir: bool,
}

impl WalkEntry {
    pub fn file(relative: impl Into<PathBuf>) -> Self {
        Self {
            relative: relative.into(),
            is_dir: false,
        }
    }

    pub fn dir(relative: impl Into<PathBuf>) -> Self {
        Self {
            relative: relative.into(),
            is_dir: true,
        }
    }

    /// Final path segment as text
    pub fn file_name(&self) -> String {
        self.relative
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Write content to a file, replacing any existing file
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Walk `root` depth-first in pre-order.
    ///
    /// A directory is yielded immediately before its contents; `root` itself
    /// is not yielded. Siblings follow `order`.
    fn walk(&self, root: &Path, order: ListingOrder) -> FsResult<Vec<WalkEntry>>;
}
