use lightbox::LightboxError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::json::events::ErrorEvent;

/// Short machine-readable code for JSON consumers
pub fn error_code(err: &LightboxError) -> &'static str {
    match err {
        LightboxError::LibraryNotFound { .. } => "library_not_found",
        LightboxError::NotADirectory { .. } => "not_a_directory",
        LightboxError::StageNotFound { .. } => "stage_not_found",
        LightboxError::NothingToProcess { .. } => "nothing_to_process",
        LightboxError::InvalidConfig { .. } => "invalid_config",
        LightboxError::InvalidOverrides { .. } => "invalid_overrides",
        LightboxError::ToolUnavailable { .. } => "tool_unavailable",
        LightboxError::ToolFailed { .. } => "tool_failed",
        LightboxError::UnexpectedToolOutput { .. } => "unexpected_tool_output",
        LightboxError::Io(_) | LightboxError::Fs(_) => "io",
        LightboxError::Interrupted => "interrupted",
    }
}

fn fix_hint(err: &LightboxError) -> Option<String> {
    match err {
        LightboxError::LibraryNotFound { .. } | LightboxError::NotADirectory { .. } => {
            Some("Pass the directory that contains your dated project folders.".to_string())
        }
        LightboxError::StageNotFound { stage, .. } => Some(format!(
            "Run from a project directory (one containing {}) or pass --project.",
            stage
        )),
        LightboxError::InvalidConfig { .. } => {
            Some("Fix the TOML file or pass a different one with --config.".to_string())
        }
        LightboxError::ToolUnavailable { tool, .. } => Some(format!(
            "Install '{}' or point [tools] in the config at it.",
            tool
        )),
        _ => None,
    }
}

pub fn format_lightbox_error(
    err: &LightboxError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = ErrorBlock::new(err.to_string());
    if let Some(path) = err.path() {
        block = block.with_path(path);
    }
    if let Some(fix) = fix_hint(err) {
        block = block.with_fix(fix);
    }
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(lightbox) = err.downcast_ref::<LightboxError>() {
        return format_lightbox_error(lightbox, supports_color, supports_unicode);
    }

    ErrorBlock::new(format!("{:#}", err)).render(supports_color, supports_unicode)
}

pub fn print_error(err: &anyhow::Error, command: &str, json: bool) {
    if json {
        let code = err
            .downcast_ref::<LightboxError>()
            .map(error_code)
            .unwrap_or("error");
        let mut event = ErrorEvent::new(command, code, format!("{:#}", err));
        if let Some(hint) = err.downcast_ref::<LightboxError>().and_then(fix_hint) {
            event = event.with_help(hint);
        }
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
