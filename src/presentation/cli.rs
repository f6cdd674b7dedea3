//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Every prompt has a flag that answers it up front
//! - Anything left unanswered is prompted for when stdin is a terminal

use std::path::PathBuf;

use clap::Parser;

use crate::application::workflow::{RunRequest, Workflow};
use crate::domain::value_objects::{ListingOrder, Template};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// MTA Helper - scaffold Lua resources and generate meta.xml
#[derive(Parser, Debug)]
#[command(name = "mta-helper")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'mta-helper' without arguments for interactive setup.")]
pub struct Cli {
    /// Workflow to run (prompted when omitted)
    #[arg(short, long, value_enum)]
    pub mode: Option<Workflow>,

    /// Resource folder (prompted when omitted)
    #[arg(short, long)]
    pub folder: Option<PathBuf>,

    /// Templates to create in `new` mode, comma-separated
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub templates: Option<Vec<Template>>,

    /// Include the zoom example in client.lua
    #[arg(long, conflicts_with = "no_zoom")]
    pub zoom: bool,

    /// Create a placeholder client.lua without asking about zoom
    #[arg(long)]
    pub no_zoom: bool,

    /// In `scan` mode, keep the OS directory order instead of sorting by name
    #[arg(long)]
    pub native_order: bool,

    /// Output NDJSON events (never prompts)
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Zoom answer from flags, if any
    pub fn zoom_answer(&self) -> Option<bool> {
        match (self.zoom, self.no_zoom) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub fn to_request(&self) -> RunRequest {
        RunRequest {
            workflow: self.mode,
            folder: self.folder.clone(),
            templates: self.templates.clone(),
            zoom: self.zoom_answer(),
            order: ListingOrder::from_native_flag(self.native_order),
        }
    }
}
