//! Maintain command handler
//!
//! Sweeps artifacts, hardlinks selects and fixes permissions across every
//! project below a library root.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Result;
use dialoguer::Confirm;

use lightbox::domain::ports::{MaintenanceEvent, MaintenanceEventSink};
use lightbox::infrastructure::JsonEventSink;
use lightbox::presentation::cli::{Cli, MaintainArgs};
use lightbox::presentation::factory::create_maintenance_pipeline;
use lightbox::{Config, LibraryReport, MaintenanceOptions};

use super::{load_context, CommandStatus};
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::theme::LightboxTheme;
use crate::ui::views::maintain::{
    render_capability_notice, render_maintain_header, render_maintain_result, render_project,
};

/// Prints each project block as soon as its worker hands it over
struct ConsoleEventSink {
    root: PathBuf,
    dry_run: bool,
    verbose: u8,
    color: bool,
    unicode: bool,
}

impl MaintenanceEventSink for ConsoleEventSink {
    fn on_event(&self, event: MaintenanceEvent) {
        match event {
            MaintenanceEvent::Capability { support } => {
                if let Some(notice) = render_capability_notice(&support, self.color, self.unicode)
                {
                    eprint!("{}", notice);
                }
            }
            MaintenanceEvent::Located { project_count, .. } => {
                tracing::debug!(project_count, "projects located");
            }
            MaintenanceEvent::ProjectFinished { report, .. } => {
                // Clean projects only show up with -v
                if report.is_clean() && !report.interrupted && self.verbose == 0 {
                    return;
                }
                let block =
                    render_project(&report, &self.root, self.dry_run, self.color, self.unicode);
                let mut out = std::io::stdout().lock();
                let _ = out.write_all(block.as_bytes());
                let _ = out.flush();
            }
        }
    }
}

/// Config values first, then whatever the command line says
fn build_options(config: &Config, args: &MaintainArgs) -> MaintenanceOptions {
    let mut options = config.maintenance_options().with_dry_run(args.dry_run);
    if let Some(enabled) = args.remove_hidden() {
        options = options.with_remove_hidden(enabled);
    }
    if let Some(enabled) = args.remove_edits() {
        options = options.with_remove_edits(enabled);
    }
    if let Some(enabled) = args.hardlink_selects() {
        options = options.with_hardlink_selects(enabled);
    }
    if let Some(enabled) = args.fix_permissions() {
        options = options.with_fix_permissions(enabled);
    }
    if let Some(jobs) = args.jobs {
        options = options.with_jobs(jobs as usize);
    }
    options
}

fn complete_event(report: &LibraryReport) -> CompleteEvent<'static> {
    CompleteEvent::new("maintain", !report.interrupted)
        .interrupted(report.interrupted)
        .count("projects", report.project_count())
        .count("actions", report.action_count())
        .count("removed", report.removed_count())
        .count("linked", report.linked_count())
        .count("mode_changes", report.mode_change_count())
        .count("errors", report.error_count())
        .count("warnings", report.warning_count())
}

/// Execute the maintain command
pub fn cmd_maintain(
    cli: &Cli,
    args: &MaintainArgs,
    cancel: Arc<AtomicBool>,
) -> Result<CommandStatus> {
    let root: &Path = &args.library;
    let (loaded, ui) = load_context(
        cli.config.as_deref(),
        root,
        cli.json,
        cli.verbose,
        cli.color,
    )?;
    let options = build_options(&loaded.config, args);
    let pipeline = create_maintenance_pipeline(cancel);
    pipeline.check_root(root)?;

    if ui.json {
        emit_event(&StartEvent::new("maintain", root, options.dry_run))?;
        let report = pipeline.execute(root, &options, &JsonEventSink::stdout())?;
        emit_event(&complete_event(&report))?;
        return Ok(status(&report));
    }

    print!(
        "{}",
        render_maintain_header(
            root,
            &options,
            loaded.source.as_deref(),
            ui.color,
            ui.unicode
        )
    );
    println!();

    if !options.any_enabled() {
        println!("Every stage is switched off; nothing to do.");
        return Ok(CommandStatus::Success);
    }

    if !options.dry_run && !args.yes && ui.interactive() {
        let mut prompt = format!("Apply maintenance to {}?", root.display());
        if options.remove_edits {
            prompt.push_str(" 1_EDIT contents will be deleted.");
        }
        let confirmed = Confirm::with_theme(&LightboxTheme::new(ui.unicode))
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(CommandStatus::Success);
        }
    }

    let sink = ConsoleEventSink {
        root: root.to_path_buf(),
        dry_run: options.dry_run,
        verbose: ui.verbose,
        color: ui.color,
        unicode: ui.unicode,
    };
    let report = pipeline.execute(root, &options, &sink)?;

    println!();
    print!("{}", render_maintain_result(&report, ui.color, ui.unicode));
    Ok(status(&report))
}

/// Per-file errors do not fail a maintenance run
fn status(report: &LibraryReport) -> CommandStatus {
    if report.interrupted {
        CommandStatus::Interrupted
    } else {
        CommandStatus::Success
    }
}
