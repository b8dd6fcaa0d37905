//! Metadata tool invocations and metadata-source resolution

use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, FsResult, ToolInvocation};
use crate::domain::value_objects::Stage;

/// Tags copied from the out-of-camera file to the export
pub const CURATED_TAGS: &[&str] = &[
    "Exif.Image.Artist",
    "Exif.Image.Copyright",
    "Exif.Image.DateTime",
    "Exif.Image.Make",
    "Exif.Image.Model",
    "Exif.Image.Software",
    "Exif.Photo.ApertureValue",
    "Exif.Photo.BrightnessValue",
    "Exif.Photo.DateTimeDigitized",
    "Exif.Photo.DateTimeOriginal",
    "Exif.Photo.ExifVersion",
    "Exif.Photo.ExposureBiasValue",
    "Exif.Photo.ExposureProgram",
    "Exif.Photo.ExposureTime",
    "Exif.Photo.Flash",
    "Exif.Photo.FNumber",
    "Exif.Photo.FocalLength",
    "Exif.Photo.FocalLengthIn35mmFilm",
    "Exif.Photo.ISOSpeedRatings",
    "Exif.Photo.LensMake",
    "Exif.Photo.LensModel",
    "Exif.Photo.LensSpecification",
    "Exif.Photo.LightSource",
    "Exif.Photo.MaxApertureValue",
    "Exif.Photo.MeteringMode",
    "Exif.Photo.SensitivityType",
    "Exif.Photo.ShutterSpeedValue",
];

/// Suffix added by denoise/enhance in the editor
pub const ENHANCED_SUFFIX: &str = "-Enhanced-NR";
/// Suffix for black-and-white variants of a shot
pub const BW_SUFFIX: &str = "-BW";
/// Out-of-camera format preferred as metadata source
pub const OOC_EXTENSION: &str = "jpg";
pub const EXPORT_EXTENSION: &str = "jpg";

/// Export file stem for an edit: `-Enhanced-NR` dropped, `-BW` kept
pub fn target_stem(edit_stem: &str) -> &str {
    edit_stem.strip_suffix(ENHANCED_SUFFIX).unwrap_or(edit_stem)
}

/// Stem of the camera file an edit came from
pub fn source_stem(edit_stem: &str) -> &str {
    let stem = edit_stem.strip_suffix(BW_SUFFIX).unwrap_or(edit_stem);
    stem.strip_suffix(ENHANCED_SUFFIX).unwrap_or(stem)
}

/// `exiv2 rm <dst>`
pub fn clear_invocation(program: &str, target: &Path) -> ToolInvocation {
    ToolInvocation::new(program).arg("rm").arg(target)
}

/// `exiv2 -PVk -K <tag>... <src>`
pub fn export_invocation(program: &str, source: &Path) -> ToolInvocation {
    let mut inv = ToolInvocation::new(program).arg("-PVk");
    for tag in CURATED_TAGS {
        inv = inv.arg("-K").arg(tag);
    }
    inv.arg(source)
}

/// `exiv2 -m- <dst>` with directives on stdin
pub fn import_invocation(program: &str, target: &Path, directives: &[String]) -> ToolInvocation {
    ToolInvocation::new(program)
        .arg("-m-")
        .arg(target)
        .stdin(directives.join("\n"))
}

/// Exported `set` lines, trimmed (the tool pads some values) and without blanks
pub fn exported_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Where to copy metadata from, in order of preference:
/// `0_RAW/<stem>.jpg`, then the first `0_RAW/<stem>*.*`, then the first
/// `<project>/<stem>*.*`.
pub fn find_metadata_source<FS: FileSystem + ?Sized>(
    fs: &FS,
    project: &Path,
    stem: &str,
) -> FsResult<Option<PathBuf>> {
    let raw_dir = project.join(Stage::Raw.dir_name());

    let ooc = raw_dir.join(format!("{}.{}", stem, OOC_EXTENSION));
    if fs.entry(&ooc)?.is_some_and(|e| e.is_plain_file()) {
        return Ok(Some(ooc));
    }

    for dir in [raw_dir.as_path(), project] {
        if !fs.is_dir(dir) {
            continue;
        }
        let found = fs
            .list_dir(dir)?
            .into_iter()
            .find(|e| e.is_plain_file() && !e.is_hidden() && stem_glob_matches(&e.name_lossy(), stem));
        if let Some(entry) = found {
            return Ok(Some(entry.path));
        }
    }
    Ok(None)
}

/// `<stem>*.*`
fn stem_glob_matches(name: &str, stem: &str) -> bool {
    name.strip_prefix(stem).is_some_and(|rest| rest.contains('.'))
}
