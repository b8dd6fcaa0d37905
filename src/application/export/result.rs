//! Export result types

use std::path::PathBuf;

use super::preset::ResizePreset;

/// An edit rendered to `2_EXPORT` (or planned, in dry run)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Camera file the EXIF tags were copied from
    pub metadata_source: PathBuf,
    /// Number of override directives appended (0 in dry run)
    pub overrides_applied: usize,
    /// Tool command lines, for dry-run and verbose output
    pub commands: Vec<String>,
}

/// An edit that could not be exported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    pub source: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Exported(ExportedFile),
    Failed(ExportFailure),
}

/// Result of exporting one project
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub project: PathBuf,
    pub export_dir: PathBuf,
    pub preset: ResizePreset,
    pub overrides: Option<PathBuf>,
    pub dry_run: bool,
    pub outcomes: Vec<ExportOutcome>,
    pub interrupted: bool,
}

impl ExportResult {
    pub fn exported(&self) -> impl Iterator<Item = &ExportedFile> {
        self.outcomes.iter().filter_map(|o| match o {
            ExportOutcome::Exported(f) => Some(f),
            ExportOutcome::Failed(_) => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExportFailure> {
        self.outcomes.iter().filter_map(|o| match o {
            ExportOutcome::Failed(f) => Some(f),
            ExportOutcome::Exported(_) => None,
        })
    }

    pub fn exported_count(&self) -> usize {
        self.exported().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn is_success(&self) -> bool {
        self.failure_count() == 0 && !self.interrupted
    }
}
