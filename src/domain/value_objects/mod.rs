//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod capability;
mod config_warning;
mod content_hash;
mod export_size;
mod file_mode;
mod permission_class;
mod stage;

pub use capability::HardlinkSupport;
pub use config_warning::ConfigWarning;
pub use content_hash::ContentHash;
pub use export_size::ExportSize;
pub use file_mode::FileMode;
pub use permission_class::PermissionClass;
pub use stage::Stage;
