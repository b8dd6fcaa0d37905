//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;

pub use home::{lightbox_home_dir, user_config_path, LIGHTBOX_TEST_HOME_VAR};
pub use local::LocalFs;
