//! In-memory FileSystem for use case tests

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult, WalkEntry};
use crate::domain::value_objects::ListingOrder;

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and inspected after a
/// use case has consumed a copy.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    pub dirs: Arc<Mutex<Vec<PathBuf>>>,
    /// Listing returned by `walk`, verbatim
    pub listing: Arc<Mutex<Vec<WalkEntry>>>,
    /// Writes to these paths fail with PermissionDenied
    pub read_only: Arc<Mutex<Vec<PathBuf>>>,
    /// Every successful write, in order
    pub write_log: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.lock().unwrap().push(path.into());
        self
    }

    pub fn with_listing(self, listing: Vec<WalkEntry>) -> Self {
        *self.listing.lock().unwrap() = listing;
        self
    }

    pub fn with_read_only(self, path: impl Into<PathBuf>) -> Self {
        self.read_only.lock().unwrap().push(path.into());
        self
    }

    pub fn content(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn written(&self) -> Vec<PathBuf> {
        self.write_log.lock().unwrap().clone()
    }
}

impl FileSystem for MockFileSystem {
    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if self.read_only.lock().unwrap().iter().any(|p| p == path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        self.write_log.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().iter().any(|d| d == path)
    }

    fn walk(&self, root: &Path, _order: ListingOrder) -> FsResult<Vec<WalkEntry>> {
        if !self.is_dir(root) {
            return Err(FsError::NotFound(root.to_path_buf()));
        }
        Ok(self.listing.lock().unwrap().clone())
    }
}
