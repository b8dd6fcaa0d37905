//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::maintain::MaintenanceOptions;
use crate::domain::services::{PermissionPolicy, DEFAULT_SIDECAR_EXTENSIONS};
use crate::domain::value_objects::ExportSize;
use crate::error::LightboxResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

fn default_true() -> bool {
    true
}

fn default_jobs() -> usize {
    1
}

/// `[maintain]` stage toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintainConfig {
    #[serde(default = "default_true")]
    pub remove_hidden: bool,

    #[serde(default = "default_true")]
    pub remove_edits: bool,

    #[serde(default = "default_true")]
    pub hardlink_selects: bool,

    #[serde(default = "default_true")]
    pub fix_permissions: bool,

    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

impl Default for MaintainConfig {
    fn default() -> Self {
        Self {
            remove_hidden: true,
            remove_edits: true,
            hardlink_selects: true,
            fix_permissions: true,
            jobs: 1,
        }
    }
}

/// `[permissions]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionsConfig {
    /// Root-level extensions kept writable (matched case-insensitively)
    #[serde(default = "default_sidecar_extensions")]
    pub sidecar_extensions: Vec<String>,
}

fn default_sidecar_extensions() -> Vec<String> {
    DEFAULT_SIDECAR_EXTENSIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            sidecar_extensions: default_sidecar_extensions(),
        }
    }
}

/// `[export]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub size: ExportSize,

    #[serde(default = "default_true")]
    pub border: bool,

    /// JSON override rules; relative paths resolve against the config file
    #[serde(default)]
    pub exif_overrides: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            size: ExportSize::default(),
            border: true,
            exif_overrides: None,
        }
    }
}

/// `[tools]` collaborator programs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_magick")]
    pub magick: String,

    #[serde(default = "default_exiv2")]
    pub exiv2: String,
}

fn default_magick() -> String {
    "magick".to_string()
}

fn default_exiv2() -> String {
    "exiv2".to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            magick: default_magick(),
            exiv2: default_exiv2(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub maintain: MaintainConfig,

    #[serde(default)]
    pub permissions: PermissionsConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LightboxResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LightboxResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Explicit file, then library file, then user file, then defaults;
    /// environment overrides applied last
    pub fn resolve(explicit: Option<&Path>, library: Option<&Path>) -> LightboxResult<LoadedConfig> {
        loader::resolve(explicit, library)
    }

    /// Apply environment variable overrides (LIGHTBOX_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    pub fn permission_policy(&self) -> PermissionPolicy {
        PermissionPolicy::new(&self.permissions.sidecar_extensions)
    }

    /// Maintenance options before CLI flags are applied
    pub fn maintenance_options(&self) -> MaintenanceOptions {
        MaintenanceOptions::new()
            .with_remove_hidden(self.maintain.remove_hidden)
            .with_remove_edits(self.maintain.remove_edits)
            .with_hardlink_selects(self.maintain.hardlink_selects)
            .with_fix_permissions(self.maintain.fix_permissions)
            .with_jobs(self.maintain.jobs)
            .with_policy(self.permission_policy())
    }
}
