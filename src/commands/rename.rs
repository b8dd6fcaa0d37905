//! Rename command handler
//!
//! Renames `0_RAW` files after their capture timestamp.

use std::io::Write;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Result;

use lightbox::application::{RenameOutcome, RenameResult};
use lightbox::domain::value_objects::Stage;
use lightbox::presentation::cli::{Cli, RenameArgs};
use lightbox::presentation::factory::create_rename_use_case;
use lightbox::RenameOptions;

use super::{load_context, CommandStatus};
use crate::ui::json::emit_event;
use crate::ui::json::events::{ActionEvent, CompleteEvent, IssueEvent, StartEvent};
use crate::ui::views::rename::{render_rename_header, render_rename_outcome, render_rename_result};

fn emit_outcome(outcome: &RenameOutcome) {
    let written = match outcome {
        RenameOutcome::Renamed { from, to } => {
            emit_event(&ActionEvent::new("rename", "renamed", from, to))
        }
        RenameOutcome::Unchanged { path } => {
            emit_event(&ActionEvent::new("rename", "unchanged", path, path))
        }
        RenameOutcome::Failed { path, message } => {
            emit_event(&IssueEvent::error("rename", path, message.as_str()))
        }
    };
    if let Err(err) = written {
        tracing::warn!(error = %err, "could not write event");
    }
}

fn status(result: &RenameResult) -> CommandStatus {
    if result.interrupted {
        CommandStatus::Interrupted
    } else if result.is_success() {
        CommandStatus::Success
    } else {
        CommandStatus::Failed
    }
}

/// Execute the rename command
pub fn cmd_rename(cli: &Cli, args: &RenameArgs, cancel: Arc<AtomicBool>) -> Result<CommandStatus> {
    let (loaded, ui) = load_context(
        cli.config.as_deref(),
        &args.project,
        cli.json,
        cli.verbose,
        cli.color,
    )?;
    let options = RenameOptions::new(&args.project)
        .with_dry_run(args.dry_run)
        .with_exiv2(&loaded.config.tools.exiv2);
    let use_case = create_rename_use_case(cancel);

    if ui.json {
        emit_event(&StartEvent::new("rename", &options.project, options.dry_run))?;
        let result = use_case.execute(&options, &mut emit_outcome)?;
        emit_event(
            &CompleteEvent::new("rename", result.is_success())
                .interrupted(result.interrupted)
                .count("renamed", result.renamed_count())
                .count("unchanged", result.unchanged_count())
                .count("failed", result.failure_count()),
        )?;
        return Ok(status(&result));
    }

    print!(
        "{}",
        render_rename_header(
            &options.project.join(Stage::Raw.dir_name()),
            options.dry_run,
            ui.color,
            ui.unicode
        )
    );
    println!();

    let result = use_case.execute(&options, &mut |outcome| {
        let line = render_rename_outcome(outcome, ui.color, ui.unicode);
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    })?;

    println!();
    print!("{}", render_rename_result(&result, ui.color, ui.unicode));
    Ok(status(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn failures_map_to_failed_status() {
        let mut result = RenameResult {
            raw_dir: PathBuf::from("trip/0_RAW"),
            dry_run: false,
            outcomes: vec![RenameOutcome::Failed {
                path: PathBuf::from("trip/0_RAW/a.raf"),
                message: "no timestamp".to_string(),
            }],
            interrupted: false,
        };
        assert_eq!(status(&result), CommandStatus::Failed);

        result.interrupted = true;
        assert_eq!(status(&result), CommandStatus::Interrupted);

        result.outcomes.clear();
        result.interrupted = false;
        assert_eq!(status(&result), CommandStatus::Success);
    }
}
