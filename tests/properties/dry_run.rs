//! Property tests for dry-run fidelity and whole-pipeline idempotence.

use std::fs;
use std::path::{Path, PathBuf};
use std::collections::BTreeSet;

use proptest::prelude::*;
use tempfile::tempdir;

use lightbox::{LibraryReport, LocalFs, MaintenanceOptions, MaintenancePipeline, NoopEventSink};

/// Two projects touching every stage
fn library(root: &Path) {
    let trip = root.join("2024-01-01 Trip");
    fs::create_dir_all(trip.join("0_RAW")).unwrap();
    fs::create_dir_all(trip.join("1_EDIT/session")).unwrap();
    fs::write(trip.join("0_RAW/a.raw"), "A").unwrap();
    fs::write(trip.join("0_RAW/b.raw"), "B").unwrap();
    fs::write(trip.join("0_RAW/._a.raw"), "fork").unwrap();
    fs::write(trip.join("a.raw"), "A").unwrap();
    fs::write(trip.join("b.raw"), "changed").unwrap();
    fs::write(trip.join("a.xmp"), "<xmp/>").unwrap();
    fs::write(trip.join("0_RAW/a.xmp"), "<xmp/>").unwrap();
    fs::write(trip.join(".notes"), "todo").unwrap();
    fs::write(trip.join("._a.raw"), "fork").unwrap();
    fs::write(trip.join("1_EDIT/a.tif"), "edit").unwrap();
    fs::write(trip.join("1_EDIT/session/b.tif"), "edit").unwrap();

    let beach = root.join("2023/2023-07-04 Beach");
    fs::create_dir_all(beach.join("2_EXPORT")).unwrap();
    fs::write(beach.join("beach.jpg"), "jpg").unwrap();
    fs::write(beach.join("2_EXPORT/._beach.jpg"), "fork").unwrap();
}

fn affected(report: &LibraryReport) -> BTreeSet<PathBuf> {
    report
        .affected_paths()
        .into_iter()
        .map(|p| p.strip_prefix(&report.root).unwrap().to_path_buf())
        .collect()
}

fn run(root: &Path, options: &MaintenanceOptions) -> LibraryReport {
    MaintenancePipeline::new(LocalFs::new())
        .execute(root, options, &NoopEventSink)
        .unwrap()
}

/// No write or execute bit for anyone
#[cfg(unix)]
fn is_locked(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).unwrap().permissions().mode() & 0o333 == 0
}

#[cfg(not(unix))]
fn is_locked(path: &Path) -> bool {
    fs::metadata(path).unwrap().permissions().readonly()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 16,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: for any stage combination, the paths a dry run reports are
    /// exactly the paths a real run mutates, and the dry run touches nothing.
    #[test]
    fn property_dry_run_matches_real_run(
        remove_hidden in any::<bool>(),
        remove_edits in any::<bool>(),
        hardlink_selects in any::<bool>(),
        fix_permissions in any::<bool>(),
    ) {
        let options = MaintenanceOptions::none()
            .with_remove_hidden(remove_hidden)
            .with_remove_edits(remove_edits)
            .with_hardlink_selects(hardlink_selects)
            .with_fix_permissions(fix_permissions);

        let dry_dir = tempdir().unwrap();
        library(dry_dir.path());
        let dry = run(dry_dir.path(), &options.clone().with_dry_run(true));
        prop_assert!(dry_dir.path().join("2024-01-01 Trip/._a.raw").exists());
        prop_assert!(dry_dir.path().join("2024-01-01 Trip/1_EDIT/a.tif").exists());

        let real_dir = tempdir().unwrap();
        library(real_dir.path());
        let real = run(real_dir.path(), &options);

        prop_assert_eq!(affected(&dry), affected(&real));
    }

    /// PROPERTY: for any stage combination, a second real run finds nothing
    /// left to do and every locked file stays locked.
    #[test]
    fn property_second_run_is_a_no_op(
        remove_hidden in any::<bool>(),
        remove_edits in any::<bool>(),
        hardlink_selects in any::<bool>(),
        fix_permissions in any::<bool>(),
    ) {
        let options = MaintenanceOptions::none()
            .with_remove_hidden(remove_hidden)
            .with_remove_edits(remove_edits)
            .with_hardlink_selects(hardlink_selects)
            .with_fix_permissions(fix_permissions);

        let dir = tempdir().unwrap();
        library(dir.path());
        run(dir.path(), &options);
        let second = run(dir.path(), &options);

        prop_assert_eq!(second.action_count(), 0);
        prop_assert_eq!(second.error_count(), 0);

        if fix_permissions {
            let trip = dir.path().join("2024-01-01 Trip");
            for rel in ["0_RAW/a.xmp", "0_RAW/a.raw", ".notes"] {
                prop_assert!(is_locked(&trip.join(rel)), "{} is writable", rel);
            }
        }
    }
}
