//! `L/2024-01-01 Trip`: one raw original and a loose select in the root.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use lightbox::domain::value_objects::ContentHash;
use lightbox::{
    Action, Issue, LocalFs, MaintenanceOptions, MaintenancePipeline, NoopEventSink,
};

fn trip(root: &Path, select: &str) -> PathBuf {
    let project = root.join("2024-01-01 Trip");
    fs::create_dir_all(project.join("0_RAW")).unwrap();
    fs::write(project.join("0_RAW/img_0001.raw"), "A").unwrap();
    fs::write(project.join("img_0001.raw"), select).unwrap();
    project
}

fn dedup_only() -> MaintenanceOptions {
    MaintenanceOptions::none().with_hardlink_selects(true)
}

#[cfg(unix)]
#[test]
fn identical_select_shares_storage() {
    use std::os::unix::fs::MetadataExt;

    let root = tempdir().unwrap();
    let project = trip(root.path(), "A");

    let report = MaintenancePipeline::new(LocalFs::new())
        .execute(root.path(), &dedup_only(), &NoopEventSink)
        .unwrap();

    assert_eq!(report.linked_count(), 1);
    let raw = fs::metadata(project.join("0_RAW/img_0001.raw")).unwrap();
    let select = fs::metadata(project.join("img_0001.raw")).unwrap();
    assert_eq!((raw.dev(), raw.ino()), (select.dev(), select.ino()));
    assert_eq!(raw.nlink(), 2);
    assert_eq!(fs::read_to_string(project.join("img_0001.raw")).unwrap(), "A");
}

#[test]
fn differing_select_is_untouched_with_one_warning() {
    let root = tempdir().unwrap();
    let project = trip(root.path(), "B");

    let report = MaintenancePipeline::new(LocalFs::new())
        .execute(root.path(), &dedup_only(), &NoopEventSink)
        .unwrap();

    assert_eq!(report.action_count(), 0);
    assert_eq!(report.warning_count(), 1);
    assert_eq!(report.error_count(), 0);
    assert_eq!(fs::read_to_string(project.join("img_0001.raw")).unwrap(), "B");
    assert_eq!(fs::read_to_string(project.join("0_RAW/img_0001.raw")).unwrap(), "A");

    let issue = &report.projects[0].issues[0];
    match issue {
        Issue::ContentMismatch {
            select_digest,
            raw_digest,
            ..
        } => {
            assert_eq!(*select_digest, ContentHash::from_bytes(b"B"));
            assert_eq!(*raw_digest, ContentHash::from_bytes(b"A"));
        }
        other => panic!("expected a mismatch, got {:?}", other),
    }
    assert!(issue.to_string().contains(ContentHash::from_bytes(b"A").as_str()));
}

#[test]
fn full_run_is_idempotent() {
    let root = tempdir().unwrap();
    let project = trip(root.path(), "A");
    fs::write(project.join("._img_0001.raw"), "fork").unwrap();
    fs::write(project.join("img_0001.xmp"), "<xmp/>").unwrap();
    fs::create_dir_all(project.join("1_EDIT")).unwrap();
    fs::write(project.join("1_EDIT/img_0001.tif"), "edit").unwrap();

    let pipeline = MaintenancePipeline::new(LocalFs::new());
    let first = pipeline
        .execute(root.path(), &MaintenanceOptions::default(), &NoopEventSink)
        .unwrap();
    assert!(first.action_count() > 0);
    assert!(first
        .actions()
        .any(|a| matches!(a, Action::Removed { path, .. } if path.ends_with("._img_0001.raw"))));

    let second = pipeline
        .execute(root.path(), &MaintenanceOptions::default(), &NoopEventSink)
        .unwrap();
    assert_eq!(second.action_count(), 0, "{:?}", second.projects);
    assert_eq!(second.error_count(), 0);
}
