//! Terminal prompts backed by dialoguer.

use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use mta_helper::domain::ports::Selector;
use mta_helper::{MtaError, MtaResult};

use crate::ui::context::UiContext;
use crate::ui::theme::prompt_theme;

/// Asks the operator on the terminal. Esc/q dismisses a prompt.
pub struct DialoguerSelector {
    theme: ColorfulTheme,
}

impl DialoguerSelector {
    pub fn new(ui: &UiContext) -> Self {
        Self {
            theme: prompt_theme(ui.color, ui.unicode),
        }
    }
}

fn prompt_error(err: dialoguer::Error) -> MtaError {
    MtaError::Prompt(err.to_string())
}

impl Selector for DialoguerSelector {
    fn pick_one(&self, prompt: &str, options: &[&str]) -> MtaResult<Option<String>> {
        let picked = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;

        Ok(picked.map(|i| options[i].to_string()))
    }

    fn pick_multiple(&self, prompt: &str, options: &[&str]) -> MtaResult<Option<Vec<String>>> {
        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(format!("{} (space to toggle, enter to confirm)", prompt))
            .items(options)
            .interact_opt()
            .map_err(prompt_error)?;

        Ok(picked.map(|indices| {
            indices
                .into_iter()
                .map(|i| options[i].to_string())
                .collect()
        }))
    }

    fn pick_folder(&self, prompt: &str) -> MtaResult<Option<PathBuf>> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(format!("{} (empty to cancel)", prompt))
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;

        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        Ok(Some(PathBuf::from(answer)))
    }

    fn confirm(&self, prompt: &str) -> MtaResult<Option<bool>> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact_opt()
            .map_err(prompt_error)
    }
}
