//! Scan result

use std::path::PathBuf;

use crate::domain::entities::Manifest;

/// Result of a scan run
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
}
