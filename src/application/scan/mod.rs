//! Scan Use Case
//!
//! Generates `meta.xml` for an existing resource folder from file names.

mod options;
mod result;
mod use_case;

pub use options::ScanOptions;
pub use result::ScanResult;
pub use use_case::ScanUseCase;
