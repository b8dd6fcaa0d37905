//! Shared JSON event types for consistent CLI output.
//!
//! The maintain command streams its per-project events through the library's
//! `JsonEventSink`; these types cover the envelope (`start`, `complete`,
//! `error`) and the per-file events of `export` and `rename`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    /// Library root or project directory
    pub path: String,
    pub dry_run: bool,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, path: &Path, dry_run: bool) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            path: path.display().to_string(),
            dry_run,
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    pub interrupted: bool,
    #[serde(flatten)]
    pub counts: BTreeMap<&'static str, usize>,
}

impl<'a> CompleteEvent<'a> {
    pub fn new(command: &'a str, success: bool) -> Self {
        Self {
            event: "complete",
            command,
            success,
            interrupted: false,
            counts: BTreeMap::new(),
        }
    }

    pub fn interrupted(mut self, interrupted: bool) -> Self {
        self.interrupted = interrupted;
        self
    }

    pub fn count(mut self, key: &'static str, value: usize) -> Self {
        self.counts.insert(key, value);
        self
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// A file-level mutation by `export` or `rename`.
#[derive(Debug, Clone, Serialize)]
pub struct ActionEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub kind: &'static str,
    pub path: String,
    pub target: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,
}

impl<'a> ActionEvent<'a> {
    pub fn new(command: &'a str, kind: &'static str, path: &Path, target: &Path) -> Self {
        Self {
            event: "action",
            command,
            kind,
            path: path.display().to_string(),
            target: target.display().to_string(),
            commands: Vec::new(),
        }
    }

    pub fn with_commands(mut self, commands: Vec<String>) -> Self {
        self.commands = commands;
        self
    }
}

/// A file that could not be processed.
#[derive(Debug, Clone, Serialize)]
pub struct IssueEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub kind: &'static str,
    pub severity: &'static str,
    pub path: String,
    pub message: String,
}

impl<'a> IssueEvent<'a> {
    pub fn error(command: &'a str, path: &Path, message: impl Into<String>) -> Self {
        Self {
            event: "issue",
            command,
            kind: "file_operation",
            severity: "error",
            path: path.display().to_string(),
            message: message.into(),
        }
    }
}
