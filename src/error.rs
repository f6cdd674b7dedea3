//! Error types for mta-helper
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for mta-helper operations
pub type MtaResult<T> = Result<T, MtaError>;

/// Main error type for mta-helper operations
#[derive(Error, Debug)]
pub enum MtaError {
    /// The operator dismissed a prompt without answering
    #[error("{message}")]
    Cancelled { message: String },

    /// An empty answer where one was required, or a missing flag with no way to prompt
    #[error("{message}")]
    NoSelection { message: String },

    /// Target folder does not exist or is not a directory
    #[error("folder not found: {path}")]
    FolderNotFound { path: PathBuf },

    /// Prompt backend failure (terminal gone, etc.)
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// File system failure
    #[error("{0}")]
    Fs(#[from] FsError),
}

impl MtaError {
    pub fn cancelled(message: impl Into<String>) -> Self {
        MtaError::Cancelled {
            message: message.into(),
        }
    }

    pub fn no_selection(message: impl Into<String>) -> Self {
        MtaError::NoSelection {
            message: message.into(),
        }
    }

    /// Cancellation and empty picks abort the run without being a failure of the tool itself.
    pub fn is_operator_abort(&self) -> bool {
        matches!(
            self,
            MtaError::Cancelled { .. } | MtaError::NoSelection { .. }
        )
    }
}
