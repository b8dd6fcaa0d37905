//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::file_system::{EntryInfo, EntryKind, FileIdentity, FileSystem, FsError, FsResult};
use crate::domain::value_objects::{ContentHash, FileMode, HardlinkSupport};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

fn entry_info(path: PathBuf, name: OsString, meta: &Metadata) -> EntryInfo {
    let file_type = meta.file_type();
    let kind = if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    };

    EntryInfo {
        path,
        name,
        kind,
        mode: mode_of(meta),
        identity: identity_of(meta),
        junction: is_junction(meta),
    }
}

fn inspect(path: &Path) -> FsResult<EntryInfo> {
    let meta = fs::symlink_metadata(path).map_err(|e| FsError::at(path, e))?;
    let name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| path.as_os_str().to_os_string());
    Ok(entry_info(path.to_path_buf(), name, &meta))
}

#[cfg(unix)]
fn mode_of(meta: &Metadata) -> FileMode {
    use std::os::unix::fs::PermissionsExt;
    FileMode::new(meta.permissions().mode())
}

#[cfg(not(unix))]
fn mode_of(meta: &Metadata) -> FileMode {
    if meta.permissions().readonly() {
        FileMode::new(0o444)
    } else {
        FileMode::new(0o666)
    }
}

#[cfg(unix)]
fn identity_of(meta: &Metadata) -> Option<FileIdentity> {
    use std::os::unix::fs::MetadataExt;
    Some(FileIdentity {
        device: meta.dev(),
        inode: meta.ino(),
    })
}

#[cfg(not(unix))]
fn identity_of(_meta: &Metadata) -> Option<FileIdentity> {
    None
}

#[cfg(windows)]
fn is_junction(meta: &Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;
    const FILE_ATTRIBUTE_REPARSE_POINT: u32 = 0x400;
    meta.file_attributes() & FILE_ATTRIBUTE_REPARSE_POINT != 0
}

#[cfg(not(windows))]
fn is_junction(_meta: &Metadata) -> bool {
    false
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn entry(&self, path: &Path) -> FsResult<Option<EntryInfo>> {
        match inspect(path) {
            Ok(info) => Ok(Some(info)),
            Err(FsError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn list_dir(&self, dir: &Path) -> FsResult<Vec<EntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| FsError::at(dir, e))? {
            let entry = entry.map_err(|e| FsError::at(dir, e))?;
            let path = entry.path();
            match fs::symlink_metadata(&path) {
                Ok(meta) => entries.push(entry_info(path, entry.file_name(), &meta)),
                // Vanished between readdir and stat
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(FsError::at(&path, e)),
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn walk(&self, dir: &Path) -> FsResult<Vec<EntryInfo>> {
        if !dir.is_dir() {
            return Err(FsError::NotFound(dir.to_path_buf()));
        }

        let mut builder = WalkBuilder::new(dir);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        let mut entries = Vec::new();
        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }
            match inspect(entry.path()) {
                Ok(info) => entries.push(info),
                Err(FsError::NotFound(_)) => continue,
                Err(err) => {
                    tracing::warn!(path = %entry.path().display(), error = %err, "skipping entry");
                }
            }
        }
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        fs::remove_file(path).map_err(|e| FsError::at(path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::remove_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn hard_link(&self, original: &Path, link: &Path) -> FsResult<()> {
        fs::hard_link(original, link).map_err(|e| FsError::at(link, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        fs::rename(from, to).map_err(|e| FsError::at(to, e))
    }

    #[cfg(unix)]
    fn set_mode(&self, path: &Path, mode: FileMode) -> FsResult<()> {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode.bits()))
            .map_err(|e| FsError::at(path, e))
    }

    #[cfg(not(unix))]
    fn set_mode(&self, path: &Path, mode: FileMode) -> FsResult<()> {
        let mut perms = fs::metadata(path)
            .map_err(|e| FsError::at(path, e))?
            .permissions();
        perms.set_readonly(!mode.is_writable_by_anyone());
        fs::set_permissions(path, perms).map_err(|e| FsError::at(path, e))
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        let file = fs::File::open(path).map_err(|e| FsError::at(path, e))?;
        ContentHash::from_reader(BufReader::new(file)).map_err(|e| FsError::at(path, e))
    }

    fn probe_hardlinks(&self, dir: &Path) -> HardlinkSupport {
        let mut probe = match tempfile::Builder::new()
            .prefix(".lightbox-probe-")
            .suffix(".dat")
            .tempfile_in(dir)
        {
            Ok(file) => file,
            Err(err) => {
                return HardlinkSupport::Unsupported {
                    reason: format!("cannot create probe file: {}", err),
                }
            }
        };
        if let Err(err) = probe.write_all(b"TEST") {
            return HardlinkSupport::Unsupported {
                reason: format!("cannot write probe file: {}", err),
            };
        }

        let link = probe.path().with_extension("link");
        let result = fs::hard_link(probe.path(), &link);
        if link.exists() {
            let _ = fs::remove_file(&link);
        }
        // `probe` removes itself on drop

        match result {
            Ok(()) => HardlinkSupport::Supported,
            Err(err) => HardlinkSupport::Unsupported {
                reason: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn list_dir_is_sorted_and_typed() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("b_dir")).unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("c.txt"), "c").unwrap();

        let fs = LocalFs::new();
        let entries = fs.list_dir(dir.path()).unwrap();
        let names: Vec<String> = entries.iter().map(|e| e.name_lossy()).collect();
        assert_eq!(names, vec!["a.txt", "b_dir", "c.txt"]);
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[1].kind, EntryKind::Dir);
    }

    #[test]
    fn walk_reports_nested_entries_but_not_root() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("x/y")).unwrap();
        fs::write(dir.path().join("x/y/._f"), "f").unwrap();
        fs::write(dir.path().join(".hidden"), "h").unwrap();

        let fs = LocalFs::new();
        let mut paths: Vec<PathBuf> = fs
            .walk(dir.path())
            .unwrap()
            .into_iter()
            .map(|e| e.path)
            .collect();
        paths.sort();
        assert_eq!(
            paths,
            vec![
                dir.path().join(".hidden"),
                dir.path().join("x"),
                dir.path().join("x/y"),
                dir.path().join("x/y/._f"),
            ]
        );
    }

    #[test]
    fn entry_returns_none_for_missing() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();
        assert!(fs.entry(&dir.path().join("missing")).unwrap().is_none());
    }

    #[test]
    fn hash_matches_content_hash() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("hash.raw");
        fs::write(&file, "hello").unwrap();

        let fs = LocalFs::new();
        assert_eq!(fs.hash(&file).unwrap(), ContentHash::from_bytes(b"hello"));
    }

    #[test]
    fn hash_of_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();
        assert!(matches!(
            fs.hash(&dir.path().join("nope")),
            Err(FsError::NotFound(_))
        ));
    }

    #[test]
    fn probe_cleans_up_after_itself() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();

        let support = fs.probe_hardlinks(dir.path());

        assert!(support.is_supported());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn probe_on_missing_dir_is_unsupported() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();
        let support = fs.probe_hardlinks(&dir.path().join("missing"));
        assert!(matches!(support, HardlinkSupport::Unsupported { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn hard_link_shares_identity() {
        let dir = tempdir().unwrap();
        let original = dir.path().join("a.raw");
        let link = dir.path().join("b.raw");
        fs::write(&original, "A").unwrap();

        let fs = LocalFs::new();
        fs.hard_link(&original, &link).unwrap();

        let a = fs.entry(&original).unwrap().unwrap();
        let b = fs.entry(&link).unwrap().unwrap();
        assert_eq!(a.identity, b.identity);
    }

    #[cfg(unix)]
    #[test]
    fn set_mode_applies_bits() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.raw");
        fs::write(&file, "A").unwrap();

        let fs = LocalFs::new();
        fs.set_mode(&file, FileMode::new(0o444)).unwrap();

        assert_eq!(fs.entry(&file).unwrap().unwrap().mode, FileMode::new(0o444));
    }
}
