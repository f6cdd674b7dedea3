//! Domain Entities
//!
//! - `Manifest` / `ManifestEntry` - the model behind `meta.xml`
//! - `ScaffoldFile` - rendered content bound for the resource folder

mod manifest;
mod scaffold_file;

pub use manifest::{Manifest, ManifestEntry, MANIFEST_FILE_NAME, SCRIPT_EXTENSION};
pub use scaffold_file::ScaffoldFile;
