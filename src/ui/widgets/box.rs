use unicode_width::UnicodeWidthStr;

use crossterm::style::Stylize;

use crate::ui::theme;

/// Border glyphs for one rendering mode
struct Frame {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl Frame {
    fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            use theme::borders as b;
            Self {
                top_left: b::TOP_LEFT,
                top_right: b::TOP_RIGHT,
                bottom_left: b::BOTTOM_LEFT,
                bottom_right: b::BOTTOM_RIGHT,
                horizontal: b::HORIZONTAL,
                vertical: b::VERTICAL,
            }
        } else {
            use theme::borders_ascii as b;
            Self {
                top_left: b::TOP_LEFT,
                top_right: b::TOP_RIGHT,
                bottom_left: b::BOTTOM_LEFT,
                bottom_right: b::BOTTOM_RIGHT,
                horizontal: b::HORIZONTAL,
                vertical: b::VERTICAL,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        lines.extend(self.content.iter().cloned());

        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2);

        let frame = Frame::new(supports_unicode);
        let side = color_border(frame.vertical, supports_color, self.style);
        let rule = frame.horizontal.repeat(inner_width);

        let mut out = String::new();
        let top = format!("{}{}{}", frame.top_left, rule, frame.top_right);
        out.push_str(&color_border(&top, supports_color, self.style));
        out.push('\n');

        for line in &lines {
            let pad = inner_width.saturating_sub(1 + visible_width(line));
            out.push_str(&format!("{} {}{}{}\n", side, line, " ".repeat(pad), side));
        }

        let bottom = format!("{}{}{}", frame.bottom_left, rule, frame.bottom_right);
        out.push_str(&color_border(&bottom, supports_color, self.style));
        out.push('\n');
        out
    }
}

fn color_border(s: &str, supports_color: bool, style: BoxStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        BoxStyle::Info => theme::colors::INFO,
        BoxStyle::Success => theme::colors::SUCCESS,
        BoxStyle::Warning => theme::colors::WARNING,
        BoxStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> std::borrow::Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return std::borrow::Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // Skip ANSI escape sequence: ESC [ ... <final>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    std::borrow::Cow::Owned(out)
}
