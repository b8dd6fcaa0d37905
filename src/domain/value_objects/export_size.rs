//! Export size value object

use serde::{Deserialize, Serialize};

/// Size preset for shareable renders
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportSize {
    /// 4000x3500, quality 99
    #[default]
    Large,
    /// 2000x1500, quality 97
    Medium,
    /// 900x800, quality 95
    Small,
}

impl ExportSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportSize::Large => "large",
            ExportSize::Medium => "medium",
            ExportSize::Small => "small",
        }
    }
}

impl std::fmt::Display for ExportSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
