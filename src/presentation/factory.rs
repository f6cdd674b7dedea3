//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{ScaffoldUseCase, ScanUseCase};
use crate::infrastructure::LocalFs;

/// Scaffold use case writing to local disk
pub type ConcreteScaffoldUseCase = ScaffoldUseCase<LocalFs>;

/// Scan use case reading and writing local disk
pub type ConcreteScanUseCase = ScanUseCase<LocalFs>;

/// Create a scaffold use case backed by the local file system
pub fn create_scaffold_use_case() -> ConcreteScaffoldUseCase {
    ScaffoldUseCase::new(LocalFs::new())
}

/// Create a scan use case backed by the local file system
pub fn create_scan_use_case() -> ConcreteScanUseCase {
    ScanUseCase::new(LocalFs::new())
}
