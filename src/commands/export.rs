//! Export command handler
//!
//! Renders `1_EDIT/*.tif` into `2_EXPORT/*.jpg` and copies metadata over
//! from the raw original.

use std::io::Write;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Result;

use lightbox::application::{ExportOutcome, ExportResult, ResizePreset};
use lightbox::presentation::cli::{Cli, ExportArgs};
use lightbox::presentation::factory::create_export_use_case;
use lightbox::{Config, ExportOptions};

use super::{load_context, CommandStatus};
use crate::ui::json::emit_event;
use crate::ui::json::events::{ActionEvent, CompleteEvent, IssueEvent, StartEvent};
use crate::ui::views::export::{
    render_export_header, render_export_outcome, render_export_result,
};

fn build_options(config: &Config, args: &ExportArgs) -> ExportOptions {
    ExportOptions::new(&args.project)
        .with_size(args.size.unwrap_or(config.export.size))
        .with_border(args.border().unwrap_or(config.export.border))
        .with_overrides(args.exif.clone().or_else(|| config.export.exif_overrides.clone()))
        .with_dry_run(args.dry_run)
        .with_tools(&config.tools.magick, &config.tools.exiv2)
}

fn emit_outcome(outcome: &ExportOutcome) {
    let written = match outcome {
        ExportOutcome::Exported(file) => emit_event(
            &ActionEvent::new("export", "exported", &file.source, &file.target)
                .with_commands(file.commands.clone()),
        ),
        ExportOutcome::Failed(failure) => emit_event(&IssueEvent::error(
            "export",
            &failure.source,
            failure.message.as_str(),
        )),
    };
    if let Err(err) = written {
        tracing::warn!(error = %err, "could not write event");
    }
}

fn status(result: &ExportResult) -> CommandStatus {
    if result.interrupted {
        CommandStatus::Interrupted
    } else if result.is_success() {
        CommandStatus::Success
    } else {
        CommandStatus::Failed
    }
}

/// Execute the export command
pub fn cmd_export(cli: &Cli, args: &ExportArgs, cancel: Arc<AtomicBool>) -> Result<CommandStatus> {
    let (loaded, ui) = load_context(
        cli.config.as_deref(),
        &args.project,
        cli.json,
        cli.verbose,
        cli.color,
    )?;
    let options = build_options(&loaded.config, args);
    let use_case = create_export_use_case(cancel);

    if ui.json {
        emit_event(&StartEvent::new("export", &options.project, options.dry_run))?;
        let result = use_case.execute(&options, &mut emit_outcome)?;
        emit_event(
            &CompleteEvent::new("export", result.is_success())
                .interrupted(result.interrupted)
                .count("exported", result.exported_count())
                .count("failed", result.failure_count()),
        )?;
        return Ok(status(&result));
    }

    let preset = ResizePreset::new(options.size, options.border);
    print!(
        "{}",
        render_export_header(
            &options.project,
            &preset,
            options.overrides.as_deref(),
            options.dry_run,
            ui.color,
            ui.unicode
        )
    );
    println!();

    let show_commands = options.dry_run || ui.verbose > 0;
    let result = use_case.execute(&options, &mut |outcome| {
        let line = render_export_outcome(outcome, show_commands, ui.color, ui.unicode);
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    })?;

    println!();
    print!("{}", render_export_result(&result, ui.color, ui.unicode));
    Ok(status(&result))
}
