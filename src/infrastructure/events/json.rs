//! JSON Event Sink
//!
//! Outputs maintenance events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::entities::{Action, Issue, ProjectReport};
use crate::domain::ports::{MaintenanceEvent, MaintenanceEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_events(&self, events: &[serde_json::Value]) {
        if let Ok(mut writer) = self.writer.lock() {
            for event in events {
                let _ = writeln!(writer, "{}", event);
            }
            let _ = writer.flush();
        }
    }
}

/// NDJSON object for one action
fn action_json(index: usize, action: &Action) -> serde_json::Value {
    let mut value = serde_json::json!({
        "event": "action",
        "command": "maintain",
        "project_index": index,
        "kind": action.kind(),
        "path": action.path().display().to_string(),
    });
    match action {
        Action::Removed { kind, .. } => {
            value["removal"] = serde_json::json!(kind.as_str());
        }
        Action::Linked { raw, .. } => {
            value["raw"] = serde_json::json!(raw.display().to_string());
        }
        Action::ModeChanged {
            class, from, to, ..
        } => {
            value["class"] = serde_json::json!(class);
            value["from"] = serde_json::json!(from.to_string());
            value["to"] = serde_json::json!(to.to_string());
        }
    }
    value
}

/// NDJSON object for one issue
fn issue_json(index: usize, issue: &Issue) -> serde_json::Value {
    let mut value = serde_json::json!({
        "event": "issue",
        "command": "maintain",
        "project_index": index,
        "kind": issue.kind(),
        "severity": if issue.is_error() { "error" } else { "warning" },
        "path": issue.path().display().to_string(),
        "message": issue.to_string(),
    });
    if let Issue::ContentMismatch {
        raw,
        select_digest,
        raw_digest,
        ..
    } = issue
    {
        value["raw"] = serde_json::json!(raw.display().to_string());
        value["select_digest"] = serde_json::json!(select_digest.as_str());
        value["raw_digest"] = serde_json::json!(raw_digest.as_str());
    }
    value
}

fn project_events(index: usize, report: &ProjectReport) -> Vec<serde_json::Value> {
    let mut events = Vec::with_capacity(report.actions.len() + report.issues.len() + 2);
    events.push(serde_json::json!({
        "event": "project_start",
        "command": "maintain",
        "project_index": index,
        "path": report.path.display().to_string(),
    }));
    events.extend(report.actions.iter().map(|a| action_json(index, a)));
    events.extend(report.issues.iter().map(|i| issue_json(index, i)));
    events.push(serde_json::json!({
        "event": "project_complete",
        "command": "maintain",
        "project_index": index,
        "path": report.path.display().to_string(),
        "actions": report.actions.len(),
        "errors": report.error_count(),
        "warnings": report.warning_count(),
        "interrupted": report.interrupted,
    }));
    events
}

impl MaintenanceEventSink for JsonEventSink {
    fn on_event(&self, event: MaintenanceEvent) {
        let events = match event {
            MaintenanceEvent::Capability { support } => vec![serde_json::json!({
                "event": "capability",
                "command": "maintain",
                "hardlinks": support,
            })],
            // The project count is reported by the complete event
            MaintenanceEvent::Located { .. } => Vec::new(),
            MaintenanceEvent::ProjectFinished { index, report } => project_events(index, &report),
        };
        self.write_events(&events);
    }
}
