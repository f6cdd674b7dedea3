//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - flag definitions and conversion into a `RunRequest`
//! - `factory` - Creates use cases with proper dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_scaffold_use_case, create_scan_use_case};
