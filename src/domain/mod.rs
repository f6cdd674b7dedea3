//! Domain Layer
//!
//! Pure logic for scaffolding MTA resources: templates, execution contexts
//! and the `meta.xml` model.
//!
//! ## Structure
//!
//! - `entities/` - Manifest, ScaffoldFile
//! - `value_objects/` - Template, ScriptContext, ManifestPath, ListingOrder
//! - `services/` - template emitter, manifest synthesizer
//! - `ports/` - FileSystem and Selector interfaces
//!
//! This layer never touches the file system or the terminal directly.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
