//! Maintain Module
//!
//! Library housekeeping: per project, remove disposable artifacts, replace
//! selects with hardlinks to identical raw originals, and converge file
//! permissions.
//!
//! ## Structure
//!
//! - `options` - `MaintenanceOptions`
//! - `result` - `LibraryReport`
//! - `sweeper` / `dedup` / `permissions` - the three stages, in run order
//! - `use_case` - `MaintenancePipeline` (probe, locate, worker pool)
//!
//! ## Usage
//!
//! ```ignore
//! use lightbox::application::maintain::{MaintenanceOptions, MaintenancePipeline};
//!
//! let pipeline = MaintenancePipeline::new(LocalFs::new());
//! let report = pipeline.execute(root, &MaintenanceOptions::default(), &NoopEventSink)?;
//! ```

mod context;
mod dedup;
mod options;
mod permissions;
mod result;
mod sweeper;
mod use_case;

pub use dedup::{decide, replace_with_link, temp_link_path, DedupDecision};
pub use options::MaintenanceOptions;
pub use result::LibraryReport;
pub use use_case::MaintenancePipeline;
