//! Workflow resolution
//!
//! Turns a partially-answered request (from CLI flags) into a concrete plan,
//! asking the operator through a [`Selector`] for whatever is missing. When
//! no selector is available every missing answer is a `NoSelection` error
//! naming the flag that would have supplied it.

use std::path::PathBuf;

use serde::Serialize;

use crate::application::scaffold::ScaffoldOptions;
use crate::application::scan::ScanOptions;
use crate::domain::ports::Selector;
use crate::domain::value_objects::{ListingOrder, Template};
use crate::error::{MtaError, MtaResult};

/// The two things the tool can do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Workflow {
    /// Create template scripts and their meta.xml
    New,
    /// Generate meta.xml for the files already in a folder
    Scan,
}

impl Workflow {
    pub const ALL: [Workflow; 2] = [Workflow::New, Workflow::Scan];

    pub fn as_str(&self) -> &'static str {
        match self {
            Workflow::New => "new",
            Workflow::Scan => "scan",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Workflow::New => "Generate new files",
            Workflow::Scan => "Generate meta for existing files",
        }
    }

    /// Confirmation shown after a successful run
    pub fn success_message(&self) -> &'static str {
        match self {
            Workflow::New => "Files successfully created!",
            Workflow::Scan => "meta.xml generated successfully!",
        }
    }

    fn folder_prompt(&self) -> &'static str {
        match self {
            Workflow::New => "Select folder",
            Workflow::Scan => "Select folder with script files",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.label() == label)
    }
}

/// What the command line already answered
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub workflow: Option<Workflow>,
    pub folder: Option<PathBuf>,
    pub templates: Option<Vec<Template>>,
    pub zoom: Option<bool>,
    pub order: ListingOrder,
}

/// A fully-answered run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Scaffold(ScaffoldOptions),
    Scan(ScanOptions),
}

impl Plan {
    pub fn workflow(&self) -> Workflow {
        match self {
            Plan::Scaffold(_) => Workflow::New,
            Plan::Scan(_) => Workflow::Scan,
        }
    }
}

pub const WORKFLOW_PROMPT: &str = "Select an option";
pub const TEMPLATES_PROMPT: &str = "Select files to create";
pub const ZOOM_PROMPT: &str = "Include zoom functionality in client.lua?";

/// Fill in every missing answer, prompting in the same order the menu flow does:
/// workflow, folder, templates, zoom.
pub fn resolve(request: RunRequest, selector: Option<&dyn Selector>) -> MtaResult<Plan> {
    let workflow = match request.workflow {
        Some(w) => w,
        None => ask_workflow(selector)?,
    };

    let folder = match request.folder {
        Some(f) => f,
        None => ask_folder(selector, workflow)?,
    };

    if workflow == Workflow::Scan {
        return Ok(Plan::Scan(ScanOptions::new(folder).with_order(request.order)));
    }

    let templates = match request.templates {
        Some(t) if !t.is_empty() => t,
        Some(_) => return Err(MtaError::no_selection("No files selected.")),
        None => ask_templates(selector)?,
    };

    let zoom = if templates.contains(&Template::Client) {
        match request.zoom {
            Some(z) => z,
            None => ask_zoom(selector)?,
        }
    } else {
        false
    };

    Ok(Plan::Scaffold(
        ScaffoldOptions::new(folder)
            .with_templates(templates)
            .with_zoom(zoom),
    ))
}

fn require<'a>(selector: Option<&'a dyn Selector>, flag: &str) -> MtaResult<&'a dyn Selector> {
    selector.ok_or_else(|| {
        MtaError::no_selection(format!(
            "{} is required when prompts are unavailable",
            flag
        ))
    })
}

fn ask_workflow(selector: Option<&dyn Selector>) -> MtaResult<Workflow> {
    let selector = require(selector, "--mode")?;
    let labels: Vec<&str> = Workflow::ALL.iter().map(|w| w.label()).collect();

    selector
        .pick_one(WORKFLOW_PROMPT, &labels)?
        .as_deref()
        .and_then(Workflow::from_label)
        .ok_or_else(|| MtaError::cancelled("No option selected."))
}

fn ask_folder(selector: Option<&dyn Selector>, workflow: Workflow) -> MtaResult<PathBuf> {
    let selector = require(selector, "--folder")?;
    selector
        .pick_folder(workflow.folder_prompt())?
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| MtaError::cancelled("No folder selected."))
}

fn ask_templates(selector: Option<&dyn Selector>) -> MtaResult<Vec<Template>> {
    let selector = require(selector, "--templates")?;
    let labels: Vec<&str> = Template::PICKER_ORDER
        .iter()
        .map(|t| t.file_name())
        .collect();

    let picked = selector
        .pick_multiple(TEMPLATES_PROMPT, &labels)?
        .unwrap_or_default();
    let templates: Vec<Template> = picked.iter().filter_map(|l| Template::parse(l)).collect();

    if templates.is_empty() {
        return Err(MtaError::no_selection("No files selected."));
    }
    Ok(templates)
}

/// A dismissed zoom prompt means "no".
fn ask_zoom(selector: Option<&dyn Selector>) -> MtaResult<bool> {
    let selector = require(selector, "--zoom or --no-zoom")?;
    Ok(selector.confirm(ZOOM_PROMPT)?.unwrap_or(false))
}
