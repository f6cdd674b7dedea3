//! Scan Use Case
//!
//! Walks the folder, classifies every file and writes the manifest.

use crate::domain::entities::MANIFEST_FILE_NAME;
use crate::domain::ports::FileSystem;
use crate::domain::services::manifest_synthesizer;
use crate::error::{MtaError, MtaResult};

use super::options::ScanOptions;
use super::result::ScanResult;

/// Scan use case - synthesizes `meta.xml` from an existing folder
pub struct ScanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> ScanUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Walk the folder and overwrite `meta.xml` with the synthesized manifest.
    ///
    /// A `meta.xml` already in the folder is listed like any other file.
    pub fn execute(&self, options: &ScanOptions) -> MtaResult<ScanResult> {
        if !self.fs.is_dir(&options.folder) {
            return Err(MtaError::FolderNotFound {
                path: options.folder.clone(),
            });
        }

        let listing = self.fs.walk(&options.folder, options.order)?;
        tracing::debug!(entries = listing.len(), "folder walked");

        let manifest = manifest_synthesizer::from_listing(&listing);
        let manifest_path = options.folder.join(MANIFEST_FILE_NAME);
        self.fs.write(&manifest_path, &manifest.render())?;
        tracing::info!(
            folder = %options.folder.display(),
            scripts = manifest.script_count(),
            files = manifest.len() - manifest.script_count(),
            "manifest generated"
        );

        Ok(ScanResult {
            manifest_path,
            manifest,
        })
    }
}
