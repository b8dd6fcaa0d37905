//! Permission enforcement
//!
//! Raw originals are locked read-only and root sidecars stay writable.
//! Other root files, dot-files included, are locked. A root file that
//! shares storage with a raw original is left to the raw pass.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::domain::entities::{Action, Issue, ProjectDirectory, ProjectReport};
use crate::domain::ports::{EntryInfo, FileSystem};
use crate::domain::services::PermissionPolicy;
use crate::domain::value_objects::{PermissionClass, Stage};

use super::context::{Interrupted, RemovedPaths, StageContext};

pub(super) fn enforce<FS: FileSystem + ?Sized>(
    ctx: &StageContext<'_, FS>,
    project: &ProjectDirectory,
    policy: &PermissionPolicy,
    removed: &RemovedPaths,
    linked: &BTreeSet<PathBuf>,
    report: &mut ProjectReport,
) -> Result<(), Interrupted> {
    let raw_dir = project.stage_dir(Stage::Raw);
    if ctx.fs.is_dir(&raw_dir) {
        match ctx.fs.walk(&raw_dir) {
            Ok(entries) => {
                for entry in entries {
                    if !entry.is_plain_file() || removed.covers(&entry.path) {
                        continue;
                    }
                    apply(ctx, policy, PermissionClass::RawArchival, entry, report)?;
                }
            }
            Err(err) => report.push_issue(Issue::file_operation(&raw_dir, "scan", err)),
        }
    }

    let entries = match ctx.fs.list_dir(project.path()) {
        Ok(entries) => entries,
        Err(err) => {
            report.push_issue(Issue::file_operation(project.path(), "scan", err));
            return Ok(());
        }
    };
    for entry in entries {
        if !entry.is_plain_file() || removed.covers(&entry.path) {
            continue;
        }
        if linked.contains(&entry.path) {
            tracing::trace!(path = %entry.path.display(), "mode follows raw original");
            continue;
        }
        let class = policy.classify_root(&entry.path);
        apply(ctx, policy, class, entry, report)?;
    }
    Ok(())
}

fn apply<FS: FileSystem + ?Sized>(
    ctx: &StageContext<'_, FS>,
    policy: &PermissionPolicy,
    class: PermissionClass,
    entry: EntryInfo,
    report: &mut ProjectReport,
) -> Result<(), Interrupted> {
    let Some(target) = policy.transition(class, entry.mode) else {
        return Ok(());
    };
    ctx.checkpoint()?;

    if !ctx.dry_run {
        if let Err(err) = ctx.fs.set_mode(&entry.path, target) {
            report.push_issue(Issue::file_operation(&entry.path, "chmod", err));
            return Ok(());
        }
    }
    report.push_action(Action::ModeChanged {
        path: entry.path,
        class,
        from: entry.mode,
        to: target,
    });
    Ok(())
}
