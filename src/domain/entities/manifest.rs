//! Manifest entity - the contents of a resource's `meta.xml`
//!
//! A manifest is an ordered list of entries. Order is whatever the caller
//! pushed: selection order for scaffolded resources, discovery order for
//! scanned ones. Nothing is sorted here.

use serde::Serialize;

use crate::domain::value_objects::{ManifestPath, ScriptContext};

/// File name of the manifest inside a resource folder
pub const MANIFEST_FILE_NAME: &str = "meta.xml";

/// Extension that marks a file as a script
pub const SCRIPT_EXTENSION: &str = ".lua";

/// One line of `meta.xml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ManifestEntry {
    /// `<script src=".." type=".." [cache="false"] />`
    Script {
        src: ManifestPath,
        context: ScriptContext,
    },
    /// `<file src=".." />`
    File { src: ManifestPath },
}

impl ManifestEntry {
    pub fn script(src: ManifestPath, context: ScriptContext) -> Self {
        ManifestEntry::Script { src, context }
    }

    pub fn file(src: ManifestPath) -> Self {
        ManifestEntry::File { src }
    }

    pub fn src(&self) -> &ManifestPath {
        match self {
            ManifestEntry::Script { src, .. } | ManifestEntry::File { src } => src,
        }
    }

    pub fn is_script(&self) -> bool {
        matches!(self, ManifestEntry::Script { .. })
    }

    /// Render as a single self-closing tag.
    ///
    /// Paths are emitted verbatim; quotes and angle brackets are not escaped.
    pub fn render(&self) -> String {
        match self {
            ManifestEntry::Script { src, context } => {
                let cache = if context.emits_cache_attribute() {
                    " cache=\"false\""
                } else {
                    ""
                };
                format!("<script src=\"{}\" type=\"{}\"{} />", src, context, cache)
            }
            ManifestEntry::File { src } => format!("<file src=\"{}\" />", src),
        }
    }
}

/// Ordered manifest entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn script_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_script()).count()
    }

    /// Render the full `meta.xml` text (no trailing newline)
    pub fn render(&self) -> String {
        let mut out = String::from("<meta>\n");
        for entry in &self.entries {
            out.push_str("    ");
            out.push_str(&entry.render());
            out.push('\n');
        }
        out.push_str("</meta>");
        out
    }
}

impl FromIterator<ManifestEntry> for Manifest {
    fn from_iter<I: IntoIterator<Item = ManifestEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
