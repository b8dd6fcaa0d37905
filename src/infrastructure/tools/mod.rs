//! External collaborator adapters

mod process;

pub use process::ProcessRunner;
