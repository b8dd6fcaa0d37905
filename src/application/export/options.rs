//! Export options

use std::path::PathBuf;

use crate::domain::value_objects::ExportSize;

/// Options for the export use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Project directory holding `0_RAW` and `1_EDIT`
    pub project: PathBuf,
    pub size: ExportSize,
    pub border: bool,
    /// JSON override rules file
    pub overrides: Option<PathBuf>,
    pub dry_run: bool,
    /// Raster tool program name or path
    pub magick: String,
    /// Metadata tool program name or path
    pub exiv2: String,
}

impl ExportOptions {
    pub fn new(project: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
            size: ExportSize::default(),
            border: true,
            overrides: None,
            dry_run: false,
            magick: "magick".to_string(),
            exiv2: "exiv2".to_string(),
        }
    }

    pub fn with_size(mut self, size: ExportSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn with_overrides(mut self, overrides: Option<PathBuf>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_tools(mut self, magick: impl Into<String>, exiv2: impl Into<String>) -> Self {
        self.magick = magick.into();
        self.exiv2 = exiv2.into();
        self
    }
}
