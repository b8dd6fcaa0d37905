//! Styled text for terminal output

use crossterm::style::{Color, Stylize};

use crate::ui::theme;

/// What a piece of text means; each tone maps to one theme color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl Tone {
    fn color(self) -> Option<Color> {
        match self {
            Tone::Plain => None,
            Tone::Success => Some(theme::colors::SUCCESS),
            Tone::Error => Some(theme::colors::ERROR),
            Tone::Warning => Some(theme::colors::WARNING),
            Tone::Info => Some(theme::colors::INFO),
            Tone::Dim => Some(theme::colors::DIM),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    tone: Tone,
    bold: bool,
}

impl ColoredText {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Error)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Warning)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Info)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Dim)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// ANSI-styled when color is on, the bare text otherwise
    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }
        let mut styled = self.text.as_str().stylize();
        if let Some(color) = self.tone.color() {
            styled = styled.with(color);
        }
        if self.bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_means_bare_text() {
        assert_eq!(ColoredText::success("linked").render(false), "linked");
        assert_eq!(
            ColoredText::new("2024-01-01 Trip", Tone::Plain)
                .bold()
                .render(false),
            "2024-01-01 Trip"
        );
    }

    #[test]
    fn color_adds_ansi_escape() {
        let rendered = ColoredText::error("chmod failed").render(true);
        assert!(rendered.contains("\u{1b}["));
        assert!(rendered.contains("chmod failed"));
    }

    #[test]
    fn plain_tone_has_no_color() {
        assert_eq!(Tone::Plain.color(), None);
        assert_eq!(Tone::Dim.color(), Some(theme::colors::DIM));
    }
}
