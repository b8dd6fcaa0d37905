//! Rename Use Case
//!
//! Gives every file in `0_RAW` a sortable `YYYYMMDD_HHMM_NNNN.<ext>` name
//! derived from its capture timestamp.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::ports::{EntryInfo, FileSystem, ToolInvocation, ToolRunner};
use crate::domain::value_objects::Stage;
use crate::error::{LightboxError, LightboxResult};

use super::options::RenameOptions;
use super::result::{RenameOutcome, RenameResult};
use super::timestamp::{canonical_name, CaptureTime, DATETIME_ORIGINAL_TAG};

pub struct RenameUseCase<FS: FileSystem, TR: ToolRunner> {
    fs: FS,
    pub(super) runner: TR,
    cancel: Arc<AtomicBool>,
}

impl<FS: FileSystem, TR: ToolRunner> RenameUseCase<FS, TR> {
    pub fn new(fs: FS, runner: TR) -> Self {
        Self {
            fs,
            runner,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn execute(
        &self,
        options: &RenameOptions,
        on_file: &mut dyn FnMut(&RenameOutcome),
    ) -> LightboxResult<RenameResult> {
        let raw_dir = options.project.join(Stage::Raw.dir_name());
        if !self.fs.is_dir(&raw_dir) {
            return Err(LightboxError::StageNotFound {
                stage: Stage::Raw.dir_name(),
                path: raw_dir,
            });
        }

        let files: Vec<EntryInfo> = self
            .fs
            .list_dir(&raw_dir)?
            .into_iter()
            .filter(|e| e.is_plain_file() && !e.is_hidden() && e.path.extension().is_some())
            .collect();
        if files.is_empty() {
            return Err(LightboxError::NothingToProcess {
                pattern: "*.*".to_string(),
                dir: raw_dir,
            });
        }

        let mut result = RenameResult {
            raw_dir: raw_dir.clone(),
            dry_run: options.dry_run,
            outcomes: Vec::new(),
            interrupted: false,
        };
        // Names claimed earlier in this run; in dry run they do not exist yet
        let mut claimed: BTreeSet<PathBuf> = BTreeSet::new();

        for file in files {
            if self.cancel.load(Ordering::SeqCst) {
                result.interrupted = true;
                break;
            }
            let outcome = match self.rename_one(options, &raw_dir, &file, &mut claimed) {
                Ok(outcome) => outcome,
                Err(err @ LightboxError::ToolUnavailable { .. }) => return Err(err),
                Err(err) => RenameOutcome::Failed {
                    path: file.path.clone(),
                    message: err.to_string(),
                },
            };
            on_file(&outcome);
            result.outcomes.push(outcome);
        }
        Ok(result)
    }

    fn rename_one(
        &self,
        options: &RenameOptions,
        raw_dir: &Path,
        file: &EntryInfo,
        claimed: &mut BTreeSet<PathBuf>,
    ) -> LightboxResult<RenameOutcome> {
        let invocation = ToolInvocation::new(&options.exiv2)
            .args(["-PVk", "-K", DATETIME_ORIGINAL_TAG])
            .arg(&file.path);
        let output = self.runner.run(&invocation)?;

        let unexpected = || LightboxError::UnexpectedToolOutput {
            what: "capture timestamp",
            file: file.path.clone(),
        };
        let time = if output.success {
            CaptureTime::parse(&output.stdout).ok_or_else(unexpected)?
        } else {
            return Err(unexpected());
        };

        let stem = file
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = file
            .path
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = canonical_name(&time, &stem, &extension).ok_or_else(|| {
            LightboxError::UnexpectedToolOutput {
                what: "frame counter",
                file: file.path.clone(),
            }
        })?;

        let target = raw_dir.join(&name);
        if target == file.path {
            return Ok(RenameOutcome::Unchanged {
                path: file.path.clone(),
            });
        }
        if claimed.contains(&target) || self.fs.entry(&target)?.is_some() {
            return Err(LightboxError::Io(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{} already exists", target.display()),
            )));
        }

        tracing::debug!(from = %file.path.display(), to = %target.display(), "rename");
        if !options.dry_run {
            self.fs.rename(&file.path, &target)?;
        }
        claimed.insert(target.clone());
        Ok(RenameOutcome::Renamed {
            from: file.path.clone(),
            to: target,
        })
    }
}
