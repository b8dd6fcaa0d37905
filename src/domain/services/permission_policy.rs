//! Permission policy
//!
//! Decides which mode a file should have, based on its `PermissionClass`.
//! Pure: callers supply the current mode and apply the result themselves.

use std::path::Path;

use crate::domain::value_objects::{FileMode, PermissionClass};

/// Default sidecar metadata extensions
pub const DEFAULT_SIDECAR_EXTENSIONS: &[&str] = &["xmp"];

/// Classifies project files and computes mode transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionPolicy {
    sidecar_extensions: Vec<String>,
}

impl Default for PermissionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SIDECAR_EXTENSIONS.iter().copied())
    }
}

impl PermissionPolicy {
    /// Build a policy; extensions may be given with or without a leading dot
    pub fn new<I, S>(sidecar_extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sidecar_extensions = sidecar_extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { sidecar_extensions }
    }

    pub fn sidecar_extensions(&self) -> &[String] {
        &self.sidecar_extensions
    }

    /// Case-insensitive extension match
    pub fn is_sidecar(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.sidecar_extensions.iter().any(|s| *s == ext))
    }

    /// Class of a file directly in the project root
    pub fn classify_root(&self, path: &Path) -> PermissionClass {
        if self.is_sidecar(path) {
            PermissionClass::SidecarMetadata
        } else {
            PermissionClass::SelectOrOther
        }
    }

    /// New mode for a file, or `None` if it is already in its target state
    pub fn transition(&self, class: PermissionClass, current: FileMode) -> Option<FileMode> {
        let target = class.target_mode(current);
        (target != current).then_some(target)
    }
}
