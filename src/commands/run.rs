//! Run command handler
//!
//! Resolves the workflow from flags and prompts, executes it, and reports
//! the outcome as human text or NDJSON events.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use mta_helper::application::resolve;
use mta_helper::domain::ports::Selector;
use mta_helper::presentation::{create_scaffold_use_case, create_scan_use_case, Cli};
use mta_helper::{Manifest, Plan};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, FileWrittenEvent, StartEvent};
use crate::ui::selector::DialoguerSelector;
use crate::ui::views::run::render_run_summary;

/// What a finished run produced, whichever workflow it was
struct Outcome {
    written: Vec<PathBuf>,
    manifest_path: PathBuf,
    manifest: Manifest,
}

/// Execute a run
pub fn cmd_run(cli: &Cli) -> Result<()> {
    let ui = UiContext::new(cli.json, cli.color);

    let selector = ui.interactive.then(|| DialoguerSelector::new(&ui));
    let plan = resolve(
        cli.to_request(),
        selector.as_ref().map(|s| s as &dyn Selector),
    )?;
    tracing::debug!(?plan, "resolved run");

    let workflow = plan.workflow();
    if ui.json {
        emit_event(&StartEvent::new(workflow, display(folder_of(&plan))))?;
    }

    let outcome = execute(&plan)?;

    if ui.json {
        for path in outcome.written.iter().chain([&outcome.manifest_path]) {
            emit_event(&FileWrittenEvent::new(display(path)))?;
        }
        emit_event(&CompleteEvent::success(
            workflow,
            display(&outcome.manifest_path),
            &outcome.manifest,
        ))?;
        return Ok(());
    }

    print!(
        "{}",
        render_run_summary(
            workflow,
            &outcome.written,
            &outcome.manifest_path,
            &outcome.manifest,
            ui.color,
            ui.unicode,
        )
    );
    Ok(())
}

fn execute(plan: &Plan) -> Result<Outcome> {
    let outcome = match plan {
        Plan::Scaffold(options) => {
            let result = create_scaffold_use_case()
                .execute(options)
                .with_context(|| format!("failed to scaffold {}", options.folder.display()))?;
            Outcome {
                written: result.written,
                manifest_path: result.manifest_path,
                manifest: result.manifest,
            }
        }
        Plan::Scan(options) => {
            let result = create_scan_use_case()
                .execute(options)
                .with_context(|| format!("failed to scan {}", options.folder.display()))?;
            Outcome {
                written: Vec::new(),
                manifest_path: result.manifest_path,
                manifest: result.manifest,
            }
        }
    };

    tracing::debug!(
        workflow = plan.workflow().as_str(),
        entries = outcome.manifest.len(),
        "wrote {}",
        outcome.manifest_path.display()
    );
    Ok(outcome)
}

fn folder_of(plan: &Plan) -> &Path {
    match plan {
        Plan::Scaffold(options) => &options.folder,
        Plan::Scan(options) => &options.folder,
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
