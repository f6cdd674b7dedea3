//! Shared JSON event types.

use serde::Serialize;

use mta_helper::{Manifest, ManifestEntry, MtaError, Workflow};

/// Event emitted once the plan is resolved, before anything is written.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent {
    pub event: &'static str,
    pub command: Workflow,
    pub folder: String,
    pub version: &'static str,
}

impl StartEvent {
    pub fn new(command: Workflow, folder: impl Into<String>) -> Self {
        Self {
            event: "start",
            command,
            folder: folder.into(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted after each file lands on disk.
#[derive(Debug, Clone, Serialize)]
pub struct FileWrittenEvent {
    pub event: &'static str,
    pub path: String,
}

impl FileWrittenEvent {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            event: "file_written",
            path: path.into(),
        }
    }
}

/// Event emitted when a run completes successfully.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: Workflow,
    pub success: bool,
    pub manifest: String,
    pub scripts: usize,
    pub entries: &'a [ManifestEntry],
}

impl<'a> CompleteEvent<'a> {
    pub fn success(
        command: Workflow,
        manifest_path: impl Into<String>,
        manifest: &'a Manifest,
    ) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            manifest: manifest_path.into(),
            scripts: manifest.script_count(),
            entries: manifest.entries(),
        }
    }
}

/// Event emitted when a run stops early.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    /// `cancelled`, `no_selection` or `error`
    pub code: &'static str,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            code,
            message: message.into(),
        }
    }

    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        let code = match err.downcast_ref::<MtaError>() {
            Some(MtaError::Cancelled { .. }) => "cancelled",
            Some(MtaError::NoSelection { .. }) => "no_selection",
            _ => "error",
        };
        Self::new(code, format!("{:#}", err))
    }
}
