//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system (and home/config path resolution)
//! - `tools/` - Child-process runner for external collaborators
//! - `events/` - NDJSON maintenance event sink

pub mod events;
pub mod fs;
pub mod tools;

pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use tools::ProcessRunner;
