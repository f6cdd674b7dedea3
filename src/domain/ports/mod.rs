//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure and the binary's UI provide concrete implementations.

pub mod file_system;
pub mod selector;

pub use file_system::{FileSystem, FsError, FsResult, WalkEntry};
pub use selector::Selector;
