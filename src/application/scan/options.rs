//! Scan options

use std::path::PathBuf;

use crate::domain::value_objects::ListingOrder;

/// Options for the "generate meta for existing files" workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Resource folder to scan (and write `meta.xml` into)
    pub folder: PathBuf,
    /// Sibling order during the walk
    pub order: ListingOrder,
}

impl ScanOptions {
    /// Create new scan options
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            order: ListingOrder::default(),
        }
    }

    /// Set listing order
    pub fn with_order(mut self, order: ListingOrder) -> Self {
        self.order = order;
        self
    }
}
