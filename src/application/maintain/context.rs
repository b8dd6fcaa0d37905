//! Per-run state shared by the maintenance stages

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::ports::FileSystem;

/// Cancellation was observed at a checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Interrupted;

pub(super) struct StageContext<'a, FS: FileSystem + ?Sized> {
    pub fs: &'a FS,
    pub dry_run: bool,
    cancel: &'a AtomicBool,
}

impl<'a, FS: FileSystem + ?Sized> StageContext<'a, FS> {
    pub fn new(fs: &'a FS, dry_run: bool, cancel: &'a AtomicBool) -> Self {
        Self {
            fs,
            dry_run,
            cancel,
        }
    }

    /// Called before every mutation (and before every project)
    pub fn checkpoint(&self) -> Result<(), Interrupted> {
        if self.cancel.load(Ordering::SeqCst) {
            Err(Interrupted)
        } else {
            Ok(())
        }
    }
}

/// Paths removed by the sweep stage during this run. In dry run these
/// still exist on disk, so later stages consult the set instead.
#[derive(Debug, Default, Clone)]
pub(super) struct RemovedPaths(BTreeSet<PathBuf>);

impl RemovedPaths {
    pub fn insert(&mut self, path: PathBuf) {
        self.0.insert(path);
    }

    /// `path` or one of its ancestors was removed
    pub fn covers(&self, path: &Path) -> bool {
        path.ancestors().any(|p| self.0.contains(p))
    }
}
