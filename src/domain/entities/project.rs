//! Project directory entity

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Stage;

/// A directory holding one shoot/session, identified by its stage children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDirectory {
    path: PathBuf,
    stages: BTreeSet<Stage>,
}

impl ProjectDirectory {
    pub fn new(path: impl Into<PathBuf>, stages: impl IntoIterator<Item = Stage>) -> Self {
        Self {
            path: path.into(),
            stages: stages.into_iter().collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stage subdirectories present at classification time
    pub fn stages(&self) -> &BTreeSet<Stage> {
        &self.stages
    }

    pub fn has_stage(&self, stage: Stage) -> bool {
        self.stages.contains(&stage)
    }

    /// Path of a stage subdirectory (whether or not it exists)
    pub fn stage_dir(&self, stage: Stage) -> PathBuf {
        self.path.join(stage.dir_name())
    }

    /// Last path component, for display
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
