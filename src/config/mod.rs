//! Configuration module for Lightbox
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LIGHTBOX_*, NO_COLOR)
//! 3. Config file: `--config`, else `<library>/.lightbox.toml`, else
//!    `~/.config/lightbox/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{parse_with_warnings, LoadedConfig, LIBRARY_CONFIG_FILE};
pub use types::{
    ColorMode, Config, ExportConfig, MaintainConfig, OutputConfig, PermissionsConfig, ToolsConfig,
};
