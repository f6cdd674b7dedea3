//! Scaffold Use Case
//!
//! Creates template scripts in a resource folder and writes a `meta.xml`
//! describing exactly those scripts.

mod options;
mod result;
mod use_case;

pub use options::ScaffoldOptions;
pub use result::ScaffoldResult;
pub use use_case::ScaffoldUseCase;
