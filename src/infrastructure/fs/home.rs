//! Home directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the Windows system API rather than
//! environment variables, so setting `HOME` in tests has no effect there.
//! `lightbox_home_dir()` checks `LIGHTBOX_TEST_HOME` first and falls back to
//! `dirs::home_dir()`.

use std::path::PathBuf;

/// Environment variable for test isolation of home directory.
pub const LIGHTBOX_TEST_HOME_VAR: &str = "LIGHTBOX_TEST_HOME";

/// Get the home directory used for Lightbox's own files (user config).
pub fn lightbox_home_dir() -> Option<PathBuf> {
    std::env::var(LIGHTBOX_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// `~/.config/lightbox/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    lightbox_home_dir().map(|home| home.join(".config/lightbox/config.toml"))
}
