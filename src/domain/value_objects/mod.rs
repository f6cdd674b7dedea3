//! Value Objects
//!
//! Immutable types identified by their value rather than identity.

mod listing_order;
mod manifest_path;
mod script_context;
mod template;

pub use listing_order::ListingOrder;
pub use manifest_path::ManifestPath;
pub use script_context::ScriptContext;
pub use template::Template;
