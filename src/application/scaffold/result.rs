//! Scaffold result

use std::path::PathBuf;

use crate::domain::entities::Manifest;

/// Result of a scaffold run
#[derive(Debug, Clone)]
pub struct ScaffoldResult {
    /// Template files written, in write order
    pub written: Vec<PathBuf>,
    /// Where the manifest went
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
}
