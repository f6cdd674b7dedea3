//! Template emitter
//!
//! Renders the static content of each scaffolded script. Everything here is
//! literal text; the only knob is the zoom example in `client.lua`.

use crate::domain::entities::ScaffoldFile;
use crate::domain::value_objects::Template;

/// Client script with resolution-dependent scaling and a render handler
pub const CLIENT_ZOOM_SCRIPT: &str = concat!(
    "local sx, sy = guiGetScreenSize()\n",
    "local zoom = (sx < 2048) and math.min(2.2, 2048/sx) or 1\n",
    "\n",
    "-- Example function using zoom\n",
    "\n",
    "function render()\n",
    "\tdxDrawRectangle(sx/2 - 200/zoom, sy/2 - 200/zoom, 400/zoom, 400/zoom, tocolor(0, 0, 0, 200))\n",
    "end\n",
    "\n",
    "addEventHandler('onClientRender', root, render)",
);

/// Content of a single template file.
///
/// `zoom` only affects `client.lua`.
pub fn render_template(template: Template, zoom: bool) -> String {
    match template {
        Template::Client if zoom => CLIENT_ZOOM_SCRIPT.to_string(),
        other => placeholder(other),
    }
}

/// One-line placeholder comment naming the file
fn placeholder(template: Template) -> String {
    format!("-- {}", template.file_name())
}

/// Render every requested template once, in request order.
pub fn emit_templates(templates: &[Template], zoom: bool) -> Vec<ScaffoldFile> {
    let mut seen = Vec::with_capacity(templates.len());
    let mut files = Vec::with_capacity(templates.len());

    for &template in templates {
        if seen.contains(&template) {
            continue;
        }
        seen.push(template);
        files.push(ScaffoldFile::new(
            template.file_name(),
            render_template(template, zoom),
        ));
    }

    files
}
