use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Right,
    Pointer,
    Trash,
    Link,
    Lock,
    Maintain,
    Export,
    Rename,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Right) => theme::icons::RIGHT,
            (true, Icon::Pointer) => theme::icons::POINTER,
            (true, Icon::Trash) => theme::icons::TRASH,
            (true, Icon::Link) => theme::icons::LINK,
            (true, Icon::Lock) => theme::icons::LOCK,
            (true, Icon::Maintain) => theme::icons::MAINTAIN,
            (true, Icon::Export) => theme::icons::EXPORT,
            (true, Icon::Rename) => theme::icons::RENAME,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Right) => theme::icons_ascii::RIGHT,
            (false, Icon::Pointer) => theme::icons_ascii::POINTER,
            (false, Icon::Trash) => theme::icons_ascii::TRASH,
            (false, Icon::Link) => theme::icons_ascii::LINK,
            (false, Icon::Lock) => theme::icons_ascii::LOCK,
            (false, Icon::Maintain) => theme::icons_ascii::MAINTAIN,
            (false, Icon::Export) => theme::icons_ascii::EXPORT,
            (false, Icon::Rename) => theme::icons_ascii::RENAME,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error | Icon::Pointer => theme::colors::ERROR,
            Icon::Warning | Icon::Trash => theme::colors::WARNING,
            Icon::Arrow | Icon::Right => theme::colors::DIM,
            Icon::Link | Icon::Lock | Icon::Maintain | Icon::Export | Icon::Rename => {
                theme::colors::INFO
            }
        };
        format!("{}", s.with(color))
    }
}
