//! MTA Helper - scaffolding for MTA Lua resources
//!
//! Creates template scripts (`client.lua`, `server.lua`, `shared.lua`,
//! `utils.lua`) together with a matching `meta.xml`, or generates `meta.xml`
//! for a folder of existing scripts from their file names.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Plan, RunRequest, Workflow};
pub use domain::entities::{Manifest, ManifestEntry};
pub use domain::value_objects::{ListingOrder, ManifestPath, ScriptContext, Template};
pub use error::{MtaError, MtaResult};
