//! Filesystem capability value object

use serde::Serialize;

/// Result of the one-time hardlink capability probe for a library
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HardlinkSupport {
    /// Deduplication was not requested, so the probe never ran
    Disabled,
    /// A test link could be created in the library root
    Supported,
    /// The probe failed; deduplication is disabled for the whole run
    Unsupported { reason: String },
}

impl HardlinkSupport {
    pub fn is_supported(&self) -> bool {
        matches!(self, HardlinkSupport::Supported)
    }
}

impl std::fmt::Display for HardlinkSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HardlinkSupport::Disabled => write!(f, "off"),
            HardlinkSupport::Supported => write!(f, "on"),
            HardlinkSupport::Unsupported { .. } => {
                write!(f, "filesystem does not support hardlinks")
            }
        }
    }
}
