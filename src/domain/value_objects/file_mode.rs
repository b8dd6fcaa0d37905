//! File mode value object
//!
//! Permission bits of a file, independent of the platform call used to
//! read or apply them.

use std::fmt;

/// Write bits for user, group and other
const WRITE_BITS: u32 = 0o222;
/// Execute bits for user, group and other
const EXEC_BITS: u32 = 0o111;
/// Read+write for user, group and other
const READ_WRITE_BITS: u32 = 0o666;

/// Permission bits (lower 12 bits of `st_mode`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileMode(u32);

impl FileMode {
    /// Mask for the permission bits including setuid/setgid/sticky
    pub const MASK: u32 = 0o7777;

    pub fn new(bits: u32) -> Self {
        Self(bits & Self::MASK)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Write and execute removed for every principal
    pub fn read_only(&self) -> Self {
        Self(self.0 & !(WRITE_BITS | EXEC_BITS))
    }

    /// Read and write granted to every principal, execute removed
    pub fn read_write(&self) -> Self {
        Self((self.0 | READ_WRITE_BITS) & !EXEC_BITS)
    }

    pub fn is_writable_by_anyone(&self) -> bool {
        self.0 & WRITE_BITS != 0
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}
