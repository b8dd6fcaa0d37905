//! Error types for Lightbox
//!
//! Uses `thiserror` for library errors. Only precondition failures and
//! configuration problems surface here; per-file failures during a
//! maintenance run are collected as report issues instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Lightbox operations
pub type LightboxResult<T> = Result<T, LightboxError>;

/// Main error type for Lightbox operations
#[derive(Error, Debug)]
pub enum LightboxError {
    /// Library root does not exist
    #[error("photo library directory not found: {path}")]
    LibraryNotFound { path: PathBuf },

    /// Library root exists but is not a directory
    #[error("photo library path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A stage subdirectory required by a project command is missing
    #[error("{stage} directory not found: {path}")]
    StageNotFound { stage: &'static str, path: PathBuf },

    /// Nothing to process in a stage directory
    #[error("no {pattern} files found in {dir}")]
    NothingToProcess { pattern: String, dir: PathBuf },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Invalid EXIF override rules file
    #[error("invalid EXIF override rules in {file}: {message}")]
    InvalidOverrides { file: PathBuf, message: String },

    /// External collaborator could not be started
    #[error("could not run '{tool}': {message}")]
    ToolUnavailable { tool: String, message: String },

    /// External collaborator exited with a failure status
    #[error("'{tool}' failed ({status}): {message}")]
    ToolFailed {
        tool: String,
        status: String,
        message: String,
    },

    /// Collaborator output did not contain what we expected
    #[error("could not extract {what} from {file}")]
    UnexpectedToolOutput { what: &'static str, file: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File system port error
    #[error("{0}")]
    Fs(#[from] crate::domain::ports::FsError),

    /// Run was interrupted before completion
    #[error("interrupted; some changes may be partially applied")]
    Interrupted,
}

impl LightboxError {
    /// The path this error is about, when there is one
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            LightboxError::LibraryNotFound { path }
            | LightboxError::NotADirectory { path }
            | LightboxError::StageNotFound { path, .. } => Some(path),
            LightboxError::NothingToProcess { dir, .. } => Some(dir),
            LightboxError::InvalidConfig { file, .. }
            | LightboxError::InvalidOverrides { file, .. }
            | LightboxError::UnexpectedToolOutput { file, .. } => Some(file),
            _ => None,
        }
    }

    /// Whether this error is a precondition failure (bad input paths)
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            LightboxError::LibraryNotFound { .. }
                | LightboxError::NotADirectory { .. }
                | LightboxError::StageNotFound { .. }
                | LightboxError::NothingToProcess { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_library_not_found() {
        let err = LightboxError::LibraryNotFound {
            path: PathBuf::from("/photos"),
        };
        assert_eq!(
            err.to_string(),
            "photo library directory not found: /photos"
        );
    }

    #[test]
    fn test_error_display_stage_not_found() {
        let err = LightboxError::StageNotFound {
            stage: "0_RAW",
            path: PathBuf::from("trip/0_RAW"),
        };
        assert_eq!(err.to_string(), "0_RAW directory not found: trip/0_RAW");
    }

    #[test]
    fn precondition_kinds() {
        assert!(LightboxError::NotADirectory {
            path: PathBuf::from("x")
        }
        .is_precondition());
        assert!(!LightboxError::Interrupted.is_precondition());
    }

    #[test]
    fn path_is_exposed_for_file_errors() {
        let err = LightboxError::InvalidConfig {
            file: PathBuf::from(".lightbox.toml"),
            message: "bad".to_string(),
        };
        assert_eq!(err.path(), Some(std::path::Path::new(".lightbox.toml")));
    }
}
