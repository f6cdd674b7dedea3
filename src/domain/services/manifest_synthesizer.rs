//! Manifest synthesizer
//!
//! Builds a [`Manifest`] either from a set of scaffolded templates or from a
//! pre-order folder listing. Pure: no I/O, no sorting.

use crate::domain::entities::{Manifest, ManifestEntry, SCRIPT_EXTENSION};
use crate::domain::ports::WalkEntry;
use crate::domain::value_objects::{ManifestPath, ScriptContext, Template};

/// Manifest for freshly scaffolded templates.
///
/// Entries follow [`Template::MANIFEST_ORDER`] regardless of selection order;
/// the context comes from the template itself.
pub fn from_templates(selected: &[Template]) -> Manifest {
    Template::MANIFEST_ORDER
        .into_iter()
        .filter(|t| selected.contains(t))
        .map(|t| ManifestEntry::script(ManifestPath::new(t.file_name()), t.context()))
        .collect()
}

/// Manifest for an existing resource folder.
///
/// `listing` must already be in discovery order; directories are skipped
/// (their contents appear where the walk encountered them).
pub fn from_listing(listing: &[WalkEntry]) -> Manifest {
    listing.iter().filter_map(classify_entry).collect()
}

/// Classify one walked item; `None` for directories
pub fn classify_entry(entry: &WalkEntry) -> Option<ManifestEntry> {
    if entry.is_dir {
        return None;
    }

    let src = ManifestPath::from_relative(&entry.relative);
    let name = entry.file_name();

    if is_script(&name) {
        Some(ManifestEntry::script(src, ScriptContext::classify(&name)))
    } else {
        Some(ManifestEntry::file(src))
    }
}

/// Whether a file name carries the script extension
pub fn is_script(file_name: &str) -> bool {
    file_name.ends_with(SCRIPT_EXTENSION)
}
