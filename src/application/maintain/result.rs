//! Maintenance result types

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::domain::entities::{Action, ProjectReport};
use crate::domain::value_objects::HardlinkSupport;

use super::options::MaintenanceOptions;

/// Result of a library maintenance run
#[derive(Debug, Clone)]
pub struct LibraryReport {
    pub root: PathBuf,
    pub options: MaintenanceOptions,
    pub capability: HardlinkSupport,
    /// In locate order, whatever order workers finished in
    pub projects: Vec<ProjectReport>,
    /// Cancellation tripped; some projects may be missing or partial
    pub interrupted: bool,
}

impl LibraryReport {
    pub fn new(root: PathBuf, options: MaintenanceOptions, capability: HardlinkSupport) -> Self {
        Self {
            root,
            options,
            capability,
            projects: Vec::new(),
            interrupted: false,
        }
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.projects.iter().flat_map(|p| p.actions.iter())
    }

    pub fn action_count(&self) -> usize {
        self.actions().count()
    }

    pub fn removed_count(&self) -> usize {
        self.actions()
            .filter(|a| matches!(a, Action::Removed { .. }))
            .count()
    }

    pub fn linked_count(&self) -> usize {
        self.actions()
            .filter(|a| matches!(a, Action::Linked { .. }))
            .count()
    }

    pub fn mode_change_count(&self) -> usize {
        self.actions()
            .filter(|a| matches!(a, Action::ModeChanged { .. }))
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.projects.iter().map(|p| p.error_count()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.projects.iter().map(|p| p.warning_count()).sum()
    }

    /// Every path an action touched (or would touch in dry run)
    pub fn affected_paths(&self) -> BTreeSet<PathBuf> {
        self.actions().map(|a| a.path().to_path_buf()).collect()
    }
}
