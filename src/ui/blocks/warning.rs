use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Non-fatal notice: a capability is missing or the config was only partly understood
#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
    hint: Option<String>,
}

impl WarningBlock {
    pub fn new<I, S>(title: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            lines: lines.into_iter().map(Into::into).collect(),
            hint: None,
        }
    }

    /// What the run does about it
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(self.title.as_str()).bold().render(supports_color)
        );
        let mut b = Box::with_title(header).style(BoxStyle::Warning);
        let bullet = self.lines.len() > 1;
        for line in &self.lines {
            if bullet {
                b.add_line(format!("- {}", line));
            } else {
                b.add_line(line.clone());
            }
        }
        if let Some(hint) = &self.hint {
            b.add_line(format!(
                "{} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim(hint.as_str()).render(supports_color)
            ));
        }
        b.render(supports_color, supports_unicode)
    }
}
