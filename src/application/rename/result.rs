//! Rename result types

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Renamed (or would be, in dry run)
    Renamed { from: PathBuf, to: PathBuf },
    /// Already carries its canonical name
    Unchanged { path: PathBuf },
    Failed { path: PathBuf, message: String },
}

impl RenameOutcome {
    pub fn path(&self) -> &std::path::Path {
        match self {
            RenameOutcome::Renamed { from, .. } => from,
            RenameOutcome::Unchanged { path } | RenameOutcome::Failed { path, .. } => path,
        }
    }
}

/// Result of renaming one project's raw files
#[derive(Debug, Clone)]
pub struct RenameResult {
    pub raw_dir: PathBuf,
    pub dry_run: bool,
    pub outcomes: Vec<RenameOutcome>,
    pub interrupted: bool,
}

impl RenameResult {
    pub fn renamed_count(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Renamed { .. }))
    }

    pub fn unchanged_count(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Unchanged { .. }))
    }

    pub fn failure_count(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Failed { .. }))
    }

    pub fn is_success(&self) -> bool {
        self.failure_count() == 0 && !self.interrupted
    }

    fn count(&self, pred: impl Fn(&RenameOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}
