use crossterm::style::Color;
use dialoguer::console::style;
use dialoguer::theme::ColorfulTheme;

/// Design tokens for the mta-helper CLI UI.
///
/// All colors and icons used by the UI are sourced from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const POINTER: &str = "❯";

    // Selection states (for MultiSelect).
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const POINTER: &str = ">";

    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
}

/// Prompt theme: dialoguer's colorful theme with our selection icons.
///
/// Prompts render on stderr, so color is switched for stderr only.
pub fn prompt_theme(color: bool, unicode: bool) -> ColorfulTheme {
    dialoguer::console::set_colors_enabled_stderr(color);

    let pick = |u: &'static str, a: &'static str| (if unicode { u } else { a }).to_string();

    ColorfulTheme {
        checked_item_prefix: style(pick(icons::SELECTED, icons_ascii::SELECTED))
            .for_stderr()
            .green(),
        unchecked_item_prefix: style(pick(icons::UNSELECTED, icons_ascii::UNSELECTED))
            .for_stderr()
            .dim(),
        active_item_prefix: style(pick(icons::POINTER, icons_ascii::POINTER))
            .for_stderr()
            .cyan(),
        success_prefix: style(pick(icons::SUCCESS, icons_ascii::SUCCESS))
            .for_stderr()
            .green(),
        error_prefix: style(pick(icons::ERROR, icons_ascii::ERROR))
            .for_stderr()
            .red(),
        ..ColorfulTheme::default()
    }
}
