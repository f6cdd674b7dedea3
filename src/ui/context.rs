use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use mta_helper::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
    /// Prompts may be shown for missing answers
    pub interactive: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, cli_color, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        // JSON mode never prompts.
        let interactive = !json && caps.stdin_tty;

        Self {
            json,
            color,
            unicode: caps.supports_unicode,
            interactive,
        }
    }
}
