//! Rename command UI views

use std::path::Path;

use lightbox::application::{RenameOutcome, RenameResult};

use crate::ui::blocks::header::RunHeader;
use crate::ui::blocks::summary::{RunOutcome, RunSummary};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn render_rename_header(
    raw_dir: &Path,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    RunHeader::new(Icon::Rename, "Rename", dry_run)
        .field("Directory", raw_dir.display().to_string())
        .render(supports_color, supports_unicode)
}

pub fn render_rename_outcome(
    outcome: &RenameOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match outcome {
        RenameOutcome::Renamed { from, to } => format!(
            "{} {} {} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            file_name(from),
            Icon::Right.render(supports_unicode),
            file_name(to)
        ),
        RenameOutcome::Unchanged { path } => format!(
            "{} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(format!("{} (already named)", file_name(path)))
                .render(supports_color)
        ),
        RenameOutcome::Failed { path, message } => format!(
            "{} {}: {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            file_name(path),
            ColoredText::error(message.as_str()).render(supports_color)
        ),
    }
}

pub fn render_rename_result(
    result: &RenameResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if result.interrupted {
        "Rename Interrupted"
    } else if result.dry_run {
        "Dry Run Complete"
    } else if result.is_success() {
        "Rename Complete"
    } else {
        "Rename Finished with Errors"
    };

    let outcome = RunOutcome::from_run(result.interrupted, result.failure_count());
    let mut summary = RunSummary::new(title, outcome, result.dry_run);

    summary.tally(result.renamed_count(), "files", "renamed");
    summary.count(result.unchanged_count(), "already named");
    if result.failure_count() > 0 {
        summary.count(result.failure_count(), "failed");
    }

    if result.dry_run && result.renamed_count() > 0 {
        summary.next_step("Run without --dry-run to rename");
    }

    summary.render(supports_color, supports_unicode)
}
