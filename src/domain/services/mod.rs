//! Domain Services
//!
//! Stateless rendering logic: template content and manifest synthesis.

pub mod manifest_synthesizer;
pub mod template_emitter;

pub use template_emitter::{emit_templates, render_template, CLIENT_ZOOM_SCRIPT};
