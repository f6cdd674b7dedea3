//! Terminal presentation for the binary: prompts, colors, JSON events.

pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod selector;
pub mod terminal;
pub mod theme;
pub mod views;
