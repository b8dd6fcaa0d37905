//! Select deduplication
//!
//! A select is a root file copied out of `0_RAW`. When its bytes equal the
//! raw original's, the select is replaced by a hardlink to the original.
//! Sidecars are never linked: they stay editable, and a shared inode would
//! make the raw original editable too.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Action, Issue, ProjectDirectory, ProjectReport};
use crate::domain::ports::{EntryInfo, FileSystem, FsResult};
use crate::domain::services::PermissionPolicy;
use crate::domain::value_objects::{ContentHash, Stage};

use super::context::{Interrupted, RemovedPaths, StageContext};

/// Suffix of the temporary link created next to a select
const TEMP_LINK_SUFFIX: &str = "lightbox-link";

/// What to do with one select file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DedupDecision {
    /// Same content as the raw original; link it
    Identical { raw: PathBuf },
    /// Already shares storage with the raw original
    AlreadyLinked { raw: PathBuf },
    /// Content differs; leave both alone
    Differing {
        raw: PathBuf,
        select_digest: ContentHash,
        raw_digest: ContentHash,
    },
    /// No same-named regular file in `0_RAW`
    NoCandidate,
}

/// Decide what to do with `select`. An `Err` is an issue for this file only.
pub fn decide<FS: FileSystem + ?Sized>(
    fs: &FS,
    select: &EntryInfo,
    raw_dir: &Path,
) -> Result<DedupDecision, Issue> {
    let raw_path = raw_dir.join(&select.name);
    let raw = match fs.entry(&raw_path) {
        Ok(Some(raw)) if raw.is_plain_file() => raw,
        Ok(_) => return Ok(DedupDecision::NoCandidate),
        Err(err) => return Err(Issue::file_operation(&raw_path, "stat", err)),
    };

    if select.identity.is_some() && select.identity == raw.identity {
        return Ok(DedupDecision::AlreadyLinked { raw: raw.path });
    }

    let select_digest = fs
        .hash(&select.path)
        .map_err(|err| Issue::file_operation(&select.path, "hash", err))?;
    let raw_digest = fs
        .hash(&raw.path)
        .map_err(|err| Issue::file_operation(&raw.path, "hash", err))?;

    if select_digest == raw_digest {
        Ok(DedupDecision::Identical { raw: raw.path })
    } else {
        Ok(DedupDecision::Differing {
            raw: raw.path,
            select_digest,
            raw_digest,
        })
    }
}

/// `select` already shares storage with its same-named raw original
fn shares_storage<FS: FileSystem + ?Sized>(fs: &FS, select: &EntryInfo, raw_dir: &Path) -> bool {
    select.identity.is_some()
        && matches!(
            fs.entry(&raw_dir.join(&select.name)),
            Ok(Some(raw)) if raw.is_plain_file() && raw.identity == select.identity
        )
}

/// Hidden sibling used while swapping `select` for a link
pub fn temp_link_path(select: &Path) -> PathBuf {
    let name = select
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    select.with_file_name(format!(".{}.{}", name, TEMP_LINK_SUFFIX))
}

/// Replace `select` with a hardlink to `raw`.
///
/// The link is created under a temporary name first and renamed over the
/// select, so `select` always names either the old or the new content.
pub fn replace_with_link<FS: FileSystem + ?Sized>(
    fs: &FS,
    select: &Path,
    raw: &Path,
) -> FsResult<()> {
    let temp = temp_link_path(select);
    if fs.entry(&temp)?.is_some() {
        fs.remove_file(&temp)?;
    }

    fs.hard_link(raw, &temp)?;
    if let Err(err) = fs.rename(&temp, select) {
        if let Err(cleanup) = fs.remove_file(&temp) {
            tracing::warn!(path = %temp.display(), error = %cleanup, "could not remove temporary link");
        }
        return Err(err);
    }
    Ok(())
}

/// Run deduplication for one project and return the selects that are (or
/// in dry run would be) linked to their raw original.
pub(super) fn link_selects<FS: FileSystem + ?Sized>(
    ctx: &StageContext<'_, FS>,
    project: &ProjectDirectory,
    policy: &PermissionPolicy,
    removed: &RemovedPaths,
    report: &mut ProjectReport,
) -> Result<BTreeSet<PathBuf>, Interrupted> {
    let mut linked = BTreeSet::new();

    let raw_dir = project.stage_dir(Stage::Raw);
    if !ctx.fs.is_dir(&raw_dir) {
        return Ok(linked);
    }

    let entries = match ctx.fs.list_dir(project.path()) {
        Ok(entries) => entries,
        Err(err) => {
            report.push_issue(Issue::file_operation(project.path(), "scan", err));
            return Ok(linked);
        }
    };

    let selects = entries
        .into_iter()
        .filter(|e| e.is_plain_file() && !e.is_hidden() && !removed.covers(&e.path));

    for select in selects {
        if policy.is_sidecar(&select.path) {
            // A sidecar linked by hand still follows its raw original
            if shares_storage(ctx.fs, &select, &raw_dir) {
                linked.insert(select.path);
            }
            continue;
        }

        let decision = match decide(ctx.fs, &select, &raw_dir) {
            Ok(decision) => decision,
            Err(issue) => {
                report.push_issue(issue);
                continue;
            }
        };
        tracing::debug!(select = %select.path.display(), ?decision, "dedup decision");

        match decision {
            DedupDecision::NoCandidate => {}
            DedupDecision::AlreadyLinked { .. } => {
                linked.insert(select.path);
            }
            DedupDecision::Differing {
                raw,
                select_digest,
                raw_digest,
            } => {
                report.push_issue(Issue::ContentMismatch {
                    select: select.path,
                    raw,
                    select_digest,
                    raw_digest,
                });
            }
            DedupDecision::Identical { raw } => {
                ctx.checkpoint()?;
                if !ctx.dry_run {
                    if let Err(err) = replace_with_link(ctx.fs, &select.path, &raw) {
                        report.push_issue(Issue::file_operation(&select.path, "link", err));
                        continue;
                    }
                }
                linked.insert(select.path.clone());
                report.push_action(Action::Linked {
                    select: select.path,
                    raw,
                });
            }
        }
    }

    Ok(linked)
}
