//! Selector port - operator prompts
//!
//! Every method returns `Ok(None)` when the operator dismisses the prompt.
//! Errors are reserved for a broken prompt backend.

use std::path::PathBuf;

use crate::error::MtaResult;

pub trait Selector {
    /// Pick exactly one of `options`
    fn pick_one(&self, prompt: &str, options: &[&str]) -> MtaResult<Option<String>>;

    /// Pick any subset of `options`, returned in option order
    fn pick_multiple(&self, prompt: &str, options: &[&str]) -> MtaResult<Option<Vec<String>>>;

    /// Pick a folder
    fn pick_folder(&self, prompt: &str) -> MtaResult<Option<PathBuf>>;

    /// Yes/no question
    fn confirm(&self, prompt: &str) -> MtaResult<Option<bool>>;
}
