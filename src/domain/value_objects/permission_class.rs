//! Permission class of a file inside a project

use serde::Serialize;

use super::FileMode;

/// Role of a file for the permission policy, derived from where it lives
/// and its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionClass {
    /// Anything under `0_RAW`
    RawArchival,
    /// Root file with a sidecar metadata extension (e.g. `.xmp`)
    SidecarMetadata,
    /// Any other root file (selects, notes, ...)
    SelectOrOther,
}

impl PermissionClass {
    /// Mode this class should converge to, starting from `current`
    pub fn target_mode(&self, current: FileMode) -> FileMode {
        match self {
            PermissionClass::RawArchival | PermissionClass::SelectOrOther => current.read_only(),
            PermissionClass::SidecarMetadata => current.read_write(),
        }
    }
}

impl std::fmt::Display for PermissionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionClass::RawArchival => write!(f, "raw"),
            PermissionClass::SidecarMetadata => write!(f, "sidecar"),
            PermissionClass::SelectOrOther => write!(f, "select"),
        }
    }
}
