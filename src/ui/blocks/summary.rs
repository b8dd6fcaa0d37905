//! Boxed end-of-run summary

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Complete,
    /// Finished, but some files failed
    Partial,
    /// Stopped by Ctrl-C
    Interrupted,
}

impl RunOutcome {
    pub fn from_run(interrupted: bool, failures: usize) -> Self {
        if interrupted {
            RunOutcome::Interrupted
        } else if failures > 0 {
            RunOutcome::Partial
        } else {
            RunOutcome::Complete
        }
    }

    fn look(self) -> (BoxStyle, Icon) {
        match self {
            RunOutcome::Complete => (BoxStyle::Success, Icon::Success),
            RunOutcome::Partial => (BoxStyle::Warning, Icon::Warning),
            RunOutcome::Interrupted => (BoxStyle::Error, Icon::Warning),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    title: String,
    outcome: RunOutcome,
    dry_run: bool,
    tallies: Vec<String>,
    notes: Vec<String>,
    problems: Vec<String>,
    next_step: Option<String>,
}

impl RunSummary {
    pub fn new(title: impl Into<String>, outcome: RunOutcome, dry_run: bool) -> Self {
        Self {
            title: title.into(),
            outcome,
            dry_run,
            tallies: Vec::new(),
            notes: Vec::new(),
            problems: Vec::new(),
            next_step: None,
        }
    }

    /// `4 projects`
    pub fn count(&mut self, count: usize, noun: &str) {
        self.tallies.push(format!("{} {}", count, noun));
    }

    /// `2 paths removed`, or `2 paths would be removed` in dry run
    pub fn tally(&mut self, count: usize, noun: &str, verb: &str) {
        self.tally_by(count, noun, verb, &[]);
    }

    /// Like `tally`, followed by the non-zero parts: `3 modes changed (2 raw, 1 select)`
    pub fn tally_by(&mut self, count: usize, noun: &str, verb: &str, parts: &[(usize, String)]) {
        let mut line = if self.dry_run {
            format!("{} {} would be {}", count, noun, verb)
        } else {
            format!("{} {} {}", count, noun, verb)
        };
        let parts: Vec<String> = parts
            .iter()
            .filter(|(n, _)| *n > 0)
            .map(|(n, label)| format!("{} {}", n, label))
            .collect();
        if !parts.is_empty() {
            line.push_str(&format!(" ({})", parts.join(", ")));
        }
        self.tallies.push(line);
    }

    pub fn note(&mut self, message: impl Into<String>) {
        self.notes.push(message.into());
    }

    pub fn problem(&mut self, message: impl Into<String>) {
        self.problems.push(message.into());
    }

    pub fn next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon) = self.outcome.look();
        let title = match self.outcome {
            RunOutcome::Complete => ColoredText::success(self.title.as_str()),
            _ => ColoredText::warning(self.title.as_str()),
        };

        let mut b = Box::with_title(format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        ))
        .style(style);
        if self.dry_run {
            b.add_line(ColoredText::dim("preview only; nothing was changed").render(supports_color));
        }
        b.add_empty();
        for tally in &self.tallies {
            b.add_line(tally.clone());
        }

        let marked = [(Icon::Success, &self.notes), (Icon::Warning, &self.problems)];
        for (mark, lines) in marked {
            if lines.is_empty() {
                continue;
            }
            b.add_empty();
            for line in lines {
                b.add_line(format!("{} {}", mark.colored(supports_color, supports_unicode), line));
            }
        }

        if let Some(next_step) = &self.next_step {
            b.add_empty();
            b.add_line(format!(
                "{} {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        b.render(supports_color, supports_unicode)
    }
}
