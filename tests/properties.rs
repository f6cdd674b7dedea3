//! Property tests for mta-helper.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/classification.rs"]
mod classification;

#[path = "properties/manifest_order.rs"]
mod manifest_order;
