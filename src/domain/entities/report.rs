//! Report items produced by a maintenance run
//!
//! A `ProjectReport` is what one project contributes to the run's output:
//! the mutations performed (or, in dry run, that would be performed) and
//! the per-file problems that were recorded instead of aborting.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ContentHash, FileMode, PermissionClass};

/// What kind of disposable entry was removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalKind {
    /// `._*` resource-fork file
    HiddenFile,
    /// File directly inside `1_EDIT`
    EditFile,
    /// Directory directly inside `1_EDIT`, removed recursively
    EditDirectory,
}

impl RemovalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemovalKind::HiddenFile => "hidden_file",
            RemovalKind::EditFile => "edit_file",
            RemovalKind::EditDirectory => "edit_directory",
        }
    }
}

/// A mutation on the library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Removed {
        path: PathBuf,
        kind: RemovalKind,
    },
    /// `select` now shares storage with `raw`
    Linked { select: PathBuf, raw: PathBuf },
    ModeChanged {
        path: PathBuf,
        class: PermissionClass,
        from: FileMode,
        to: FileMode,
    },
}

impl Action {
    /// The path this action mutates
    pub fn path(&self) -> &Path {
        match self {
            Action::Removed { path, .. } | Action::ModeChanged { path, .. } => path,
            Action::Linked { select, .. } => select,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Action::Removed { .. } => "removed",
            Action::Linked { .. } => "linked",
            Action::ModeChanged { .. } => "mode_changed",
        }
    }
}

/// Something that went wrong (or looked wrong) for a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A delete, hash, link or chmod failed; later files were still processed
    FileOperation {
        path: PathBuf,
        operation: &'static str,
        message: String,
    },
    /// A select and its raw namesake have different content; nothing was linked
    ContentMismatch {
        select: PathBuf,
        raw: PathBuf,
        select_digest: ContentHash,
        raw_digest: ContentHash,
    },
}

impl Issue {
    pub fn file_operation(path: &Path, operation: &'static str, err: impl std::fmt::Display) -> Self {
        Issue::FileOperation {
            path: path.to_path_buf(),
            operation,
            message: err.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Issue::FileOperation { path, .. } => path,
            Issue::ContentMismatch { select, .. } => select,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Issue::FileOperation { .. } => "file_operation",
            Issue::ContentMismatch { .. } => "content_mismatch",
        }
    }

    /// Mismatches are warnings; everything else is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Issue::FileOperation { .. })
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Issue::FileOperation {
                path,
                operation,
                message,
            } => write!(f, "{} failed for {}: {}", operation, path.display(), message),
            Issue::ContentMismatch {
                select,
                raw,
                select_digest,
                raw_digest,
            } => write!(
                f,
                "content differs: {} ({}) vs {} ({})",
                select.display(),
                select_digest,
                raw.display(),
                raw_digest
            ),
        }
    }
}

/// Outcome of processing one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReport {
    pub path: PathBuf,
    pub actions: Vec<Action>,
    pub issues: Vec<Issue>,
    /// Cancellation tripped while this project was in progress
    pub interrupted: bool,
}

impl ProjectReport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            actions: Vec::new(),
            issues: Vec::new(),
            interrupted: false,
        }
    }

    pub fn push_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn push_issue(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// No actions and no issues
    pub fn is_clean(&self) -> bool {
        self.actions.is_empty() && self.issues.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.len() - self.error_count()
    }
}
