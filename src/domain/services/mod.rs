//! Domain Services
//!
//! Business logic that only touches the disk through domain ports.

mod permission_policy;
mod project_locator;

pub use permission_policy::{PermissionPolicy, DEFAULT_SIDECAR_EXTENSIONS};
pub use project_locator::ProjectLocator;
