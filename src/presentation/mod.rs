//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - clap definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use lightbox::presentation::factory;
//!
//! let pipeline = factory::create_maintenance_pipeline(cancel);
//! let report = pipeline.execute(&root, &options, &sink)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, Commands, ExportArgs, MaintainArgs, RenameArgs};
pub use factory::{create_export_use_case, create_maintenance_pipeline, create_rename_use_case};
