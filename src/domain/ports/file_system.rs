//! FileSystem port - abstraction over the library's file operations
//!
//! The maintenance stages only touch the disk through this trait, so tests
//! can inject failures (e.g. a hardlink that cannot be created) without
//! needing a special filesystem.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ContentHash, FileMode, HardlinkSupport};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(PathBuf, std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach the failing path to an I/O error
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(path.to_path_buf(), err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(path, err) => write!(f, "I/O error on {}: {}", path.display(), err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// What kind of directory entry this is, without following symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    /// Sockets, fifos, devices
    Other,
}

/// Identity of the storage behind a path (device + inode on unix)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileIdentity {
    pub device: u64,
    pub inode: u64,
}

/// Snapshot of one directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub path: PathBuf,
    pub name: OsString,
    pub kind: EntryKind,
    pub mode: FileMode,
    /// `None` where the platform offers no stable identity
    pub identity: Option<FileIdentity>,
    /// NTFS junction / reparse point
    pub junction: bool,
}

impl EntryInfo {
    /// Regular file that is neither a symlink nor a junction
    pub fn is_plain_file(&self) -> bool {
        self.kind == EntryKind::File && !self.junction
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir && !self.junction
    }

    /// Name starts with a dot
    pub fn is_hidden(&self) -> bool {
        self.name.to_string_lossy().starts_with('.')
    }

    pub fn name_lossy(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles that wrap `LocalFs` and inject failures
pub trait FileSystem: Send + Sync {
    /// Check if a path exists (follows symlinks)
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory (follows symlinks)
    fn is_dir(&self, path: &Path) -> bool;

    /// Inspect one path without following symlinks; `None` when missing
    fn entry(&self, path: &Path) -> FsResult<Option<EntryInfo>>;

    /// Immediate children of `dir`, sorted by name
    fn list_dir(&self, dir: &Path) -> FsResult<Vec<EntryInfo>>;

    /// Every entry below `dir` (not including `dir`), depth-first, sorted
    /// by name within each directory. Symlinks are reported, not followed.
    fn walk(&self, dir: &Path) -> FsResult<Vec<EntryInfo>>;

    /// Create a directory and any missing parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Remove a single file or symlink
    fn remove_file(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Create `link` as a new name for the storage behind `original`
    fn hard_link(&self, original: &Path, link: &Path) -> FsResult<()>;

    /// Atomically rename `from` to `to`, replacing `to`
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Apply permission bits
    fn set_mode(&self, path: &Path, mode: FileMode) -> FsResult<()>;

    /// Compute content hash (SHA256) of the full file
    fn hash(&self, path: &Path) -> FsResult<ContentHash>;

    /// Check once whether hardlinks can be created inside `dir`
    fn probe_hardlinks(&self, dir: &Path) -> HardlinkSupport;
}
