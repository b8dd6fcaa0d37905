use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the Lightbox CLI UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const RIGHT: &str = "→";
    pub const POINTER: &str = "↑";
    pub const QUESTION: &str = "?";

    // Action kinds.
    pub const TRASH: &str = "🗑";
    pub const LINK: &str = "🔗";
    pub const LOCK: &str = "🔒";

    // Command identifiers (used in headers).
    pub const MAINTAIN: &str = "🧹";
    pub const EXPORT: &str = "📦";
    pub const RENAME: &str = "✎";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const RIGHT: &str = "->";
    pub const POINTER: &str = "^";
    pub const QUESTION: &str = "[?]";

    pub const TRASH: &str = "[DEL]";
    pub const LINK: &str = "[LINK]";
    pub const LOCK: &str = "[MODE]";

    pub const MAINTAIN: &str = "[MAINTAIN]";
    pub const EXPORT: &str = "[EXPORT]";
    pub const RENAME: &str = "[RENAME]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

// ----------------------------------------------------------------------------
// LightboxTheme - dialoguer theme for the confirmation prompt
// ----------------------------------------------------------------------------

/// Custom theme for dialoguer prompts using Lightbox design tokens.
///
/// Wraps `ColorfulTheme` and only swaps the prompt prefix, so ASCII
/// terminals get `[?]` instead of the Unicode glyph.
pub struct LightboxTheme {
    unicode: bool,
    inner: dialoguer::theme::ColorfulTheme,
}

impl LightboxTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    pub fn prompt_icon(&self) -> &'static str {
        if self.unicode {
            icons::QUESTION
        } else {
            icons_ascii::QUESTION
        }
    }
}

impl Theme for LightboxTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        let hint = match default {
            Some(true) => "[Y/n]",
            Some(false) => "[y/N]",
            None => "[y/n]",
        };
        write!(f, "{} {} {} ", self.prompt_icon(), prompt, hint)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.inner
            .format_confirm_prompt_selection(f, prompt, selection)
    }
}
