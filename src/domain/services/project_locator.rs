//! Project Locator
//!
//! Classifies directories of a library into projects. A directory is a
//! project when one of its immediate subdirectories is named after a stage;
//! the walk never descends into a project, so projects cannot nest.

use std::collections::BTreeSet;
use std::path::Path;

use crate::domain::entities::ProjectDirectory;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::Stage;
use crate::error::{LightboxError, LightboxResult};

/// Finds project directories below a library root
pub struct ProjectLocator<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> ProjectLocator<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Locate all projects below (or at) `root`.
    ///
    /// Fails only when `root` itself is missing, not a directory, or
    /// unreadable. Unreadable directories deeper in the tree are skipped.
    pub fn locate(&self, root: &Path) -> LightboxResult<Vec<ProjectDirectory>> {
        self.check_root(root)?;
        Ok(self.classify(root))
    }

    /// Precondition shared by every library command
    pub fn check_root(&self, root: &Path) -> LightboxResult<()> {
        if !self.fs.exists(root) {
            return Err(LightboxError::LibraryNotFound {
                path: root.to_path_buf(),
            });
        }
        if !self.fs.is_dir(root) {
            return Err(LightboxError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        // Surface an unreadable root as an error rather than "no projects".
        self.fs.list_dir(root)?;
        Ok(())
    }

    fn classify(&self, dir: &Path) -> Vec<ProjectDirectory> {
        let entries = match self.fs.list_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable directory");
                return Vec::new();
            }
        };

        let subdirs: Vec<_> = entries.into_iter().filter(|e| e.is_dir()).collect();

        let stages: BTreeSet<Stage> = subdirs
            .iter()
            .filter_map(|e| e.name.to_str().and_then(Stage::from_dir_name))
            .collect();

        if !stages.is_empty() {
            tracing::debug!(project = %dir.display(), ?stages, "classified project");
            return vec![ProjectDirectory::new(dir, stages)];
        }

        subdirs
            .iter()
            .flat_map(|sub| {
                tracing::trace!(dir = %sub.path.display(), "descending");
                self.classify(&sub.path)
            })
            .collect()
    }
}
