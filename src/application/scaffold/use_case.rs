//! Scaffold Use Case
//!
//! Orchestrates template emission, manifest synthesis and writing.

use crate::domain::entities::MANIFEST_FILE_NAME;
use crate::domain::ports::FileSystem;
use crate::domain::services::{emit_templates, manifest_synthesizer};
use crate::error::{MtaError, MtaResult};

use super::options::ScaffoldOptions;
use super::result::ScaffoldResult;

/// Scaffold use case - writes template scripts plus their manifest
pub struct ScaffoldUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> ScaffoldUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Write every requested template, then `meta.xml`.
    ///
    /// Existing files are overwritten. The first failed write aborts the run;
    /// files written before it stay on disk.
    pub fn execute(&self, options: &ScaffoldOptions) -> MtaResult<ScaffoldResult> {
        if options.templates.is_empty() {
            return Err(MtaError::no_selection("No files selected."));
        }
        if !self.fs.is_dir(&options.folder) {
            return Err(MtaError::FolderNotFound {
                path: options.folder.clone(),
            });
        }

        let files = emit_templates(&options.templates, options.zoom);
        let mut written = Vec::with_capacity(files.len());
        for file in &files {
            let dest = file.destination(&options.folder);
            self.fs.write(&dest, file.content())?;
            tracing::debug!(path = %dest.display(), "template written");
            written.push(dest);
        }

        let manifest = manifest_synthesizer::from_templates(&options.templates);
        let manifest_path = options.folder.join(MANIFEST_FILE_NAME);
        self.fs.write(&manifest_path, &manifest.render())?;
        tracing::info!(
            folder = %options.folder.display(),
            templates = written.len(),
            "scaffold complete"
        );

        Ok(ScaffoldResult {
            written,
            manifest_path,
            manifest,
        })
    }
}
