//! Reusable library layouts and stand-in collaborator tools.

use std::path::{Path, PathBuf};

use super::env::TestEnv;

pub const TRIP: &str = "2024-01-01 Trip";

/// `2024-01-01 Trip` with one raw original, an identical root select,
/// a sidecar, edits and resource-fork files
pub fn trip_library(env: &TestEnv) {
    env.write("2024-01-01 Trip/0_RAW/img_0001.raw", "A");
    env.write("2024-01-01 Trip/0_RAW/._img_0001.raw", "fork");
    env.write("2024-01-01 Trip/img_0001.raw", "A");
    env.write("2024-01-01 Trip/img_0001.xmp", "<xmp/>");
    env.write("2024-01-01 Trip/._img_0001.raw", "fork");
    env.write("2024-01-01 Trip/1_EDIT/img_0001.tif", "edit");
}

/// Write an executable shell script into `dir`
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod script");
    path
}

/// Raster stand-in: copies the source (argv 2) to the target (last arg)
#[cfg(unix)]
pub fn fake_magick(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "magick",
        r#"src="$2"
for last in "$@"; do :; done
cp "$src" "$last""#,
    )
}

/// Metadata stand-in: `rm` and `-m-` succeed, `-PVk` prints one capture
/// time for every file whose name does not contain `notime`
#[cfg(unix)]
pub fn fake_exiv2(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "exiv2",
        r#"case "$1" in
  rm) exit 0 ;;
  -m-) cat > /dev/null; exit 0 ;;
  -PVk)
    for last in "$@"; do :; done
    case "$last" in
      *notime*) exit 253 ;;
    esac
    echo "set Exif.Image.Model                          Ascii       X100V   "
    echo "set Exif.Photo.DateTimeOriginal               Ascii       2024:01:01 10:20:30"
    exit 0 ;;
esac
exit 1"#,
    )
}
