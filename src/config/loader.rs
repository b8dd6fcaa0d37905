//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LightboxError, LightboxResult};
use crate::infrastructure::fs::user_config_path;

use super::types::{ColorMode, Config};

pub use crate::domain::value_objects::ConfigWarning;

/// Per-library config file name
pub const LIBRARY_CONFIG_FILE: &str = ".lightbox.toml";

/// Effective configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// `None` when running on built-in defaults
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LightboxResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| LightboxError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let (mut config, warnings) = parse_with_warnings(&content, path)?;

    if let Some(rules) = config.export.exif_overrides.take() {
        let resolved = match path.parent() {
            Some(dir) if rules.is_relative() => dir.join(rules),
            _ => rules,
        };
        config.export.exif_overrides = Some(resolved);
    }

    Ok((config, warnings))
}

/// Parse TOML text; `file` is only used in warnings and errors
pub fn parse_with_warnings(content: &str, file: &Path) -> LightboxResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LightboxError::InvalidConfig {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    if config.maintain.jobs == 0 {
        return Err(LightboxError::InvalidConfig {
            file: file.to_path_buf(),
            message: "maintain.jobs must be at least 1".to_string(),
        });
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: file.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// First config found wins: explicit path, `<library>/.lightbox.toml`,
/// user config, then built-in defaults. Environment overrides apply on top.
pub fn resolve(explicit: Option<&Path>, library: Option<&Path>) -> LightboxResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => library
            .map(|root| root.join(LIBRARY_CONFIG_FILE))
            .filter(|p| p.is_file())
            .or_else(|| user_config_path().filter(|p| p.is_file())),
    };

    let mut loaded = match candidate {
        Some(path) => {
            tracing::debug!(config = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                warnings,
                source: Some(path),
            }
        }
        None => LoadedConfig::default(),
    };
    loaded.config = loaded.config.with_env_overrides();
    Ok(loaded)
}

/// Apply environment variable overrides (LIGHTBOX_* prefix)
///
/// Malformed values are ignored with a warning.
pub fn with_env_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // LIGHTBOX_JOBS
    if let Some(jobs) = var("LIGHTBOX_JOBS") {
        match jobs.trim().parse::<usize>() {
            Ok(n) if n > 0 => config.maintain.jobs = n,
            _ => tracing::warn!(value = %jobs, "ignoring invalid LIGHTBOX_JOBS"),
        }
    }

    // LIGHTBOX_MAGICK / LIGHTBOX_EXIV2
    if let Some(magick) = var("LIGHTBOX_MAGICK").filter(|v| !v.trim().is_empty()) {
        config.tools.magick = magick;
    }
    if let Some(exiv2) = var("LIGHTBOX_EXIV2").filter(|v| !v.trim().is_empty()) {
        config.tools.exiv2 = exiv2;
    }

    // LIGHTBOX_SIDECAR_EXTENSIONS (comma-separated)
    if let Some(exts) = var("LIGHTBOX_SIDECAR_EXTENSIONS") {
        config.permissions.sidecar_extensions = exts
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }

    // NO_COLOR (any non-empty value)
    if var("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        config.output.color = ColorMode::Never;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "maintain",
        "remove_hidden",
        "remove_edits",
        "hardlink_selects",
        "fix_permissions",
        "jobs",
        "permissions",
        "sidecar_extensions",
        "export",
        "size",
        "border",
        "exif_overrides",
        "tools",
        "magick",
        "exiv2",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
