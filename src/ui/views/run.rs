//! Run summary views
//!
//! What a successful run prints in human mode.

use std::path::{Path, PathBuf};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use mta_helper::{Manifest, Workflow};

/// Render the outcome of a run: the confirmation line, every file written
/// (`meta.xml` last), and a one-line tally of the manifest.
pub fn render_run_summary(
    workflow: Workflow,
    written: &[PathBuf],
    manifest_path: &Path,
    manifest: &Manifest,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(workflow.success_message())
            .bold()
            .render(supports_color)
    ));

    let arrow = Icon::Arrow.colored(supports_color, supports_unicode);
    for path in written.iter().map(PathBuf::as_path).chain([manifest_path]) {
        out.push_str(&format!("  {} {}\n", arrow, path.display()));
    }

    out.push_str(&format!(
        "  {}\n",
        ColoredText::dim(tally(manifest)).render(supports_color)
    ));

    out
}

fn tally(manifest: &Manifest) -> String {
    let entries = manifest.len();
    let scripts = manifest.script_count();
    format!(
        "{} {} ({} {})",
        entries,
        if entries == 1 { "entry" } else { "entries" },
        scripts,
        if scripts == 1 { "script" } else { "scripts" },
    )
}
