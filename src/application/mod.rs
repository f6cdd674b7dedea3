//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ScaffoldUseCase` - write template scripts and their `meta.xml`
//! - `ScanUseCase` - generate `meta.xml` for an existing folder
//! - `workflow::resolve` - turn flags + prompts into a concrete plan

pub mod scaffold;
pub mod scan;
pub mod workflow;

pub use scaffold::{ScaffoldOptions, ScaffoldResult, ScaffoldUseCase};
pub use scan::{ScanOptions, ScanResult, ScanUseCase};
pub use workflow::{resolve, Plan, RunRequest, Workflow};
