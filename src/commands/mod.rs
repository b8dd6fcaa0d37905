//! Command handlers for the `lightbox` binary
//!
//! Each handler loads config, builds its use case through the presentation
//! factory, renders human or NDJSON output and reports how the run ended.

pub mod export;
pub mod maintain;
pub mod rename;

use std::path::Path;

use anyhow::Result;

use lightbox::config::{Config, LoadedConfig};

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;

/// How a command finished, mapped to the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// Ran to the end but some files failed
    Failed,
    Interrupted,
}

impl CommandStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            CommandStatus::Success => 0,
            CommandStatus::Failed => 1,
            CommandStatus::Interrupted => 130,
        }
    }
}

/// Resolve config for `base` and build the UI context from it
pub fn load_context(
    explicit: Option<&Path>,
    base: &Path,
    json: bool,
    verbose: u8,
    color: Option<lightbox::config::ColorMode>,
) -> Result<(LoadedConfig, UiContext)> {
    let loaded = Config::resolve(explicit, Some(base))?;
    let ui = UiContext::new(json, verbose, color, &loaded.config);
    print_config_warnings(&loaded, &ui);
    Ok((loaded, ui))
}

fn print_config_warnings(loaded: &LoadedConfig, ui: &UiContext) {
    if loaded.warnings.is_empty() {
        return;
    }
    if ui.json {
        for warning in &loaded.warnings {
            tracing::warn!("{}", warning);
        }
        return;
    }
    let block = WarningBlock::new(
        "Config warnings",
        loaded.warnings.iter().map(ToString::to_string),
    );
    eprint!("{}", block.render(ui.color, ui.unicode));
}
