//! A nested archive with several years of projects.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use lightbox::{LocalFs, MaintenanceOptions, MaintenancePipeline, NoopEventSink};

fn archive(root: &Path) {
    for project in [
        "2022/2022-12-24 Xmas",
        "2023/2023-07-04 Beach",
        "2023/2023-08-01 Hike",
        "2024-01-01 Trip",
    ] {
        let dir = root.join(project);
        fs::create_dir_all(dir.join("0_RAW")).unwrap();
        fs::write(dir.join("0_RAW/a.raw"), project).unwrap();
        fs::write(dir.join("._a.raw"), "fork").unwrap();
    }
    // Not a project: stage names are case-sensitive
    fs::create_dir_all(root.join("scratch/0_raw")).unwrap();
    fs::write(root.join("scratch/._notes.txt"), "fork").unwrap();
}

#[test]
fn every_project_is_visited_in_order() {
    let root = tempdir().unwrap();
    archive(root.path());

    let options = MaintenanceOptions::none().with_remove_hidden(true);
    let report = MaintenancePipeline::new(LocalFs::new())
        .execute(root.path(), &options, &NoopEventSink)
        .unwrap();

    let names: Vec<String> = report
        .projects
        .iter()
        .map(|p| p.path.strip_prefix(root.path()).unwrap().display().to_string())
        .collect();
    assert_eq!(
        names,
        [
            "2022/2022-12-24 Xmas",
            "2023/2023-07-04 Beach",
            "2023/2023-08-01 Hike",
            "2024-01-01 Trip"
        ]
    );
    assert_eq!(report.removed_count(), 4);
    assert!(root.path().join("scratch/._notes.txt").exists());
}

#[test]
fn parallel_run_matches_sequential_run() {
    let sequential_root = tempdir().unwrap();
    archive(sequential_root.path());
    let parallel_root = tempdir().unwrap();
    archive(parallel_root.path());

    let pipeline = MaintenancePipeline::new(LocalFs::new());
    let sequential = pipeline
        .execute(sequential_root.path(), &MaintenanceOptions::default(), &NoopEventSink)
        .unwrap();
    let parallel = pipeline
        .execute(
            parallel_root.path(),
            &MaintenanceOptions::default().with_jobs(3),
            &NoopEventSink,
        )
        .unwrap();

    let relative = |report: &lightbox::LibraryReport, root: &Path| -> Vec<_> {
        report
            .affected_paths()
            .into_iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect()
    };
    assert_eq!(
        relative(&sequential, sequential_root.path()),
        relative(&parallel, parallel_root.path())
    );
}
