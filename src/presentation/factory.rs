//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::application::{ExportUseCase, MaintenancePipeline, RenameUseCase};
use crate::infrastructure::{LocalFs, ProcessRunner};

/// Type alias for the concrete MaintenancePipeline
pub type ConcreteMaintenancePipeline = MaintenancePipeline<LocalFs>;

/// Type alias for the concrete ExportUseCase
pub type ConcreteExportUseCase = ExportUseCase<LocalFs, ProcessRunner>;

/// Type alias for the concrete RenameUseCase
pub type ConcreteRenameUseCase = RenameUseCase<LocalFs, ProcessRunner>;

/// Create a maintenance pipeline that stops when `cancel` is set
pub fn create_maintenance_pipeline(cancel: Arc<AtomicBool>) -> ConcreteMaintenancePipeline {
    MaintenancePipeline::new(LocalFs::new()).with_cancel_flag(cancel)
}

/// Create an export use case backed by real processes
pub fn create_export_use_case(cancel: Arc<AtomicBool>) -> ConcreteExportUseCase {
    ExportUseCase::new(LocalFs::new(), ProcessRunner::new()).with_cancel_flag(cancel)
}

/// Create a rename use case backed by real processes
pub fn create_rename_use_case(cancel: Arc<AtomicBool>) -> ConcreteRenameUseCase {
    RenameUseCase::new(LocalFs::new(), ProcessRunner::new()).with_cancel_flag(cancel)
}
