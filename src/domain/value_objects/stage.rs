//! Stage value object - the canonical project subdirectories
//!
//! - `Raw` (`0_RAW`): camera originals
//! - `Edit` (`1_EDIT`): working edits, reproducible from the editing app
//! - `Export` (`2_EXPORT`): shareable renders

use serde::{Deserialize, Serialize};

/// One of the three stage subdirectories that mark a directory as a project
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Camera originals
    Raw,
    /// Working edits
    Edit,
    /// Shareable renders
    Export,
}

impl Stage {
    /// All stages in pipeline order
    pub const ALL: [Stage; 3] = [Stage::Raw, Stage::Edit, Stage::Export];

    /// Directory name of this stage inside a project
    pub fn dir_name(&self) -> &'static str {
        match self {
            Stage::Raw => "0_RAW",
            Stage::Edit => "1_EDIT",
            Stage::Export => "2_EXPORT",
        }
    }

    /// Parse a directory name; exact, case-sensitive match only
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.dir_name() == name)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_names_round_trip() {
        for stage in Stage::ALL {
            assert_eq!(Stage::from_dir_name(stage.dir_name()), Some(stage));
        }
    }

    #[test]
    fn from_dir_name_is_case_sensitive() {
        assert_eq!(Stage::from_dir_name("0_raw"), None);
        assert_eq!(Stage::from_dir_name("RAW"), None);
        assert_eq!(Stage::from_dir_name("0_RAW "), None);
    }
}
