//! Domain Entities
//!
//! - `ProjectDirectory` - a shoot/session directory found by the locator
//! - `ProjectReport` - actions and issues recorded while maintaining one project

mod project;
mod report;

pub use project::ProjectDirectory;
pub use report::{Action, Issue, ProjectReport, RemovalKind};
