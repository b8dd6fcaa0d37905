//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `MaintenancePipeline` - Sweep, dedupe and lock every project under a library root
//! - `ExportUseCase` - Resize edits into `2_EXPORT` and carry curated metadata over
//! - `RenameUseCase` - Rename raw originals after their capture timestamp

pub mod export;
pub mod maintain;
pub mod rename;

pub use export::{
    ExportFailure, ExportOptions, ExportOutcome, ExportResult, ExportUseCase, ExportedFile,
    OverrideRules, ResizePreset,
};
pub use maintain::{LibraryReport, MaintenanceOptions, MaintenancePipeline};
pub use rename::{
    canonical_name, CaptureTime, RenameOptions, RenameOutcome, RenameResult, RenameUseCase,
};
