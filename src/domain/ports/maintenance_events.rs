//! Maintenance Event Port
//!
//! Observable interface for a library maintenance run. The pipeline hands
//! each finished project to the sink as one block, so concurrent workers
//! never interleave their output.

use std::path::PathBuf;

use crate::domain::entities::ProjectReport;
use crate::domain::value_objects::HardlinkSupport;

/// Event emitted during a maintenance run
#[derive(Debug, Clone)]
pub enum MaintenanceEvent {
    /// Result of the hardlink probe (emitted once, before any project)
    Capability { support: HardlinkSupport },

    /// Projects were located under the library root
    Located { root: PathBuf, project_count: usize },

    /// A project finished (possibly interrupted)
    ProjectFinished { index: usize, report: ProjectReport },
}

/// Trait for receiving maintenance events
///
/// Implementations:
/// - the human console view
/// - the NDJSON event stream
/// - `NoopEventSink`
pub trait MaintenanceEventSink: Send + Sync {
    fn on_event(&self, event: MaintenanceEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl MaintenanceEventSink for NoopEventSink {
    fn on_event(&self, _event: MaintenanceEvent) {}
}
