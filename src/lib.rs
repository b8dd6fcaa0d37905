//! Lightbox - maintenance for dated photo libraries
//!
//! A library is a tree of project directories, each holding some of
//! `0_RAW`, `1_EDIT` and `2_EXPORT`. Lightbox sweeps disposable artifacts,
//! replaces loose select files with hardlinks to identical raw originals,
//! and keeps originals read-only while sidecar metadata stays writable.
//! It also drives the external raster and metadata tools for exports and
//! timestamp-based renames.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ExportOptions, ExportResult, ExportUseCase, LibraryReport, MaintenanceOptions,
    MaintenancePipeline, RenameOptions, RenameResult, RenameUseCase,
};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{Action, Issue, ProjectDirectory, ProjectReport};
pub use domain::ports::{MaintenanceEvent, MaintenanceEventSink, NoopEventSink};
pub use error::{LightboxError, LightboxResult};
pub use infrastructure::{LocalFs, ProcessRunner};
