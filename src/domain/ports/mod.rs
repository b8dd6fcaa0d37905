//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod maintenance_events;
pub mod tool_runner;

pub use file_system::{EntryInfo, EntryKind, FileIdentity, FileSystem, FsError, FsResult};
pub use maintenance_events::{MaintenanceEvent, MaintenanceEventSink, NoopEventSink};
pub use tool_runner::{ToolInvocation, ToolOutput, ToolRunner};
