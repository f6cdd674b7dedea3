use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: SemanticColor,
    bold: bool,
}

impl ColoredText {
    fn new(text: impl Into<String>, color: SemanticColor) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, SemanticColor::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, SemanticColor::Error)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, SemanticColor::Dim)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let color = match self.color {
            SemanticColor::Success => theme::colors::SUCCESS,
            SemanticColor::Error => theme::colors::ERROR,
            SemanticColor::Dim => theme::colors::DIM,
        };
        let mut styled = self.text.as_str().with(color);
        if self.bold {
            styled = styled.bold();
        }

        format!("{}", styled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_color_returns_plain_text() {
        let t = ColoredText::success("ok").bold();
        assert_eq!(t.render(false), "ok");
    }

    #[test]
    fn render_with_color_includes_ansi_escape() {
        let t = ColoredText::error("no");
        let rendered = t.render(true);
        assert!(rendered.contains("\u{1b}["));
        assert!(rendered.contains("no"));
    }
}
