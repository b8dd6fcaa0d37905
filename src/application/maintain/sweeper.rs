//! Artifact sweep: `._*` files anywhere in a project, and the contents of
//! `1_EDIT`.

use crate::domain::entities::{Action, Issue, ProjectDirectory, ProjectReport, RemovalKind};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::Stage;

use super::context::{Interrupted, RemovedPaths, StageContext};

/// Prefix of resource-fork shadow files
const HIDDEN_PREFIX: &str = "._";

pub(super) fn remove_hidden_files<FS: FileSystem + ?Sized>(
    ctx: &StageContext<'_, FS>,
    project: &ProjectDirectory,
    removed: &mut RemovedPaths,
    report: &mut ProjectReport,
) -> Result<(), Interrupted> {
    let entries = match ctx.fs.walk(project.path()) {
        Ok(entries) => entries,
        Err(err) => {
            report.push_issue(Issue::file_operation(project.path(), "scan", err));
            return Ok(());
        }
    };

    for entry in entries {
        if entry.is_dir() || !entry.name_lossy().starts_with(HIDDEN_PREFIX) {
            continue;
        }
        ctx.checkpoint()?;
        tracing::trace!(path = %entry.path.display(), "hidden file");

        if !ctx.dry_run {
            if let Err(err) = ctx.fs.remove_file(&entry.path) {
                report.push_issue(Issue::file_operation(&entry.path, "remove", err));
                continue;
            }
        }
        removed.insert(entry.path.clone());
        report.push_action(Action::Removed {
            path: entry.path,
            kind: RemovalKind::HiddenFile,
        });
    }
    Ok(())
}

pub(super) fn remove_edit_contents<FS: FileSystem + ?Sized>(
    ctx: &StageContext<'_, FS>,
    project: &ProjectDirectory,
    removed: &mut RemovedPaths,
    report: &mut ProjectReport,
) -> Result<(), Interrupted> {
    let edit_dir = project.stage_dir(Stage::Edit);
    if !ctx.fs.is_dir(&edit_dir) {
        return Ok(());
    }

    let entries = match ctx.fs.list_dir(&edit_dir) {
        Ok(entries) => entries,
        Err(err) => {
            report.push_issue(Issue::file_operation(&edit_dir, "scan", err));
            return Ok(());
        }
    };

    for entry in entries {
        if removed.covers(&entry.path) {
            continue;
        }
        ctx.checkpoint()?;

        let kind = if entry.is_dir() {
            RemovalKind::EditDirectory
        } else {
            RemovalKind::EditFile
        };

        if !ctx.dry_run {
            let result = match kind {
                RemovalKind::EditDirectory => ctx.fs.remove_dir_all(&entry.path),
                _ => ctx.fs.remove_file(&entry.path),
            };
            if let Err(err) = result {
                report.push_issue(Issue::file_operation(&entry.path, "remove", err));
                continue;
            }
        }
        removed.insert(entry.path.clone());
        report.push_action(Action::Removed {
            path: entry.path,
            kind,
        });
    }
    Ok(())
}
