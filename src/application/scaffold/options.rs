//! Scaffold options

use std::path::PathBuf;

use crate::domain::value_objects::Template;

/// Options for the "generate new files" workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Resource folder to write into
    pub folder: PathBuf,
    /// Templates to create
    pub templates: Vec<Template>,
    /// Include the zoom example in client.lua
    pub zoom: bool,
}

impl ScaffoldOptions {
    /// Create new scaffold options
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            ..Self::default()
        }
    }

    /// Set templates
    pub fn with_templates(mut self, templates: impl IntoIterator<Item = Template>) -> Self {
        self.templates = templates.into_iter().collect();
        self
    }

    /// Set zoom
    pub fn with_zoom(mut self, zoom: bool) -> Self {
        self.zoom = zoom;
        self
    }
}
