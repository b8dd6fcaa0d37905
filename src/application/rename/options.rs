//! Rename options

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    /// Project directory holding `0_RAW`
    pub project: PathBuf,
    pub dry_run: bool,
    /// Metadata tool program name or path
    pub exiv2: String,
}

impl RenameOptions {
    pub fn new(project: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
            dry_run: false,
            exiv2: "exiv2".to_string(),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_exiv2(mut self, exiv2: impl Into<String>) -> Self {
        self.exiv2 = exiv2.into();
        self
    }
}
