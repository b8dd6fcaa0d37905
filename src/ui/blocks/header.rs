//! Banner printed before a command touches the library

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone)]
pub struct RunHeader {
    icon: Icon,
    command: &'static str,
    dry_run: bool,
    fields: Vec<(&'static str, String)>,
}

impl RunHeader {
    pub fn new(icon: Icon, command: &'static str, dry_run: bool) -> Self {
        Self {
            icon,
            command,
            dry_run,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((label, value.into()));
        self
    }

    /// Skipped when there is no value
    pub fn optional_field(self, label: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.field(label, value),
            None => self,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut title = format!("Lightbox {}", self.command);
        if self.dry_run {
            title.push_str(" (Dry Run)");
        }
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            ColoredText::info(title).bold().render(supports_color)
        );

        let width = self.fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        for (label, value) in &self.fields {
            out.push_str(&format!("  {:<width$}  {}\n", label, value, width = width));
        }
        if self.dry_run {
            out.push_str(&format!(
                "  {}\n",
                ColoredText::dim("preview only; nothing on disk will change").render(supports_color)
            ));
        }
        out
    }
}
