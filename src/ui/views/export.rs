//! Export command UI views

use std::path::Path;

use lightbox::application::{ExportOutcome, ExportResult, ResizePreset};

use crate::ui::blocks::header::RunHeader;
use crate::ui::blocks::summary::{RunOutcome, RunSummary};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn render_export_header(
    project: &Path,
    preset: &ResizePreset,
    overrides: Option<&Path>,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let preset_line = format!(
        "{} ({}x{}, quality {}{})",
        preset.size,
        preset.width,
        preset.height,
        preset.quality,
        if preset.border.is_some() { ", border" } else { "" }
    );
    RunHeader::new(Icon::Export, "Export", dry_run)
        .field("Project", project.display().to_string())
        .field("Preset", preset_line)
        .optional_field("EXIF overrides", overrides.map(|p| p.display().to_string()))
        .render(supports_color, supports_unicode)
}

/// One line per edit; dry run and `-v` also list the tool commands
pub fn render_export_outcome(
    outcome: &ExportOutcome,
    show_commands: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match outcome {
        ExportOutcome::Exported(file) => {
            let mut out = format!(
                "{} {} {} {}",
                Icon::Success.colored(supports_color, supports_unicode),
                file_name(&file.source),
                Icon::Right.render(supports_unicode),
                file_name(&file.target)
            );
            let detail = if file.overrides_applied > 0 {
                format!(
                    " (EXIF from {}, {} overrides)",
                    file_name(&file.metadata_source),
                    file.overrides_applied
                )
            } else {
                format!(" (EXIF from {})", file_name(&file.metadata_source))
            };
            out.push_str(&ColoredText::dim(detail).render(supports_color));
            out.push('\n');
            if show_commands {
                for command in &file.commands {
                    out.push_str(&format!(
                        "    {}\n",
                        ColoredText::dim(command.as_str()).render(supports_color)
                    ));
                }
            }
            out
        }
        ExportOutcome::Failed(failure) => format!(
            "{} {}: {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            file_name(&failure.source),
            ColoredText::error(failure.message.as_str()).render(supports_color)
        ),
    }
}

pub fn render_export_result(
    result: &ExportResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if result.interrupted {
        "Export Interrupted"
    } else if result.dry_run {
        "Dry Run Complete"
    } else if result.is_success() {
        "Export Complete"
    } else {
        "Export Finished with Errors"
    };

    let outcome = RunOutcome::from_run(result.interrupted, result.failure_count());
    let mut summary = RunSummary::new(title, outcome, result.dry_run);

    summary.tally(result.exported_count(), "files", "exported");
    if result.failure_count() > 0 {
        summary.count(result.failure_count(), "failed");
    }
    summary.note(format!("output: {}", result.export_dir.display()));

    if result.dry_run && result.exported_count() > 0 {
        summary.next_step("Run without --dry-run to export");
    }

    summary.render(supports_color, supports_unicode)
}
