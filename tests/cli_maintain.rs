//! End-to-end runs of `lightbox maintain` on a temporary library.

mod common;

use common::*;

#[test]
fn maintain_sweeps_links_and_summarizes() {
    let env = TestEnv::new();
    trip_library(&env);
    let root = env.root().to_str().unwrap().to_string();

    let result = env.run(&["maintain", &root, "--yes"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_missing!(env, "2024-01-01 Trip/._img_0001.raw");
    assert_missing!(env, "2024-01-01 Trip/0_RAW/._img_0001.raw");
    assert_missing!(env, "2024-01-01 Trip/1_EDIT/img_0001.tif");
    assert_exists!(env, "2024-01-01 Trip/1_EDIT");
    assert_exists!(env, "2024-01-01 Trip/img_0001.raw");
    assert_output_contains!(result, "Maintenance Complete");
    assert_output_contains!(result, "2024-01-01 Trip");
}

#[cfg(unix)]
#[test]
fn identical_select_becomes_a_hardlink_and_originals_are_locked() {
    use std::os::unix::fs::{MetadataExt, PermissionsExt};

    let env = TestEnv::new();
    trip_library(&env);
    let root = env.root().to_str().unwrap().to_string();

    let result = env.run(&["maintain", &root, "--yes"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let raw = std::fs::metadata(env.path("2024-01-01 Trip/0_RAW/img_0001.raw")).unwrap();
    let select = std::fs::metadata(env.path("2024-01-01 Trip/img_0001.raw")).unwrap();
    assert_eq!(raw.ino(), select.ino());
    assert_eq!(raw.nlink(), 2);
    assert_eq!(raw.permissions().mode() & 0o222, 0);

    let sidecar = std::fs::metadata(env.path("2024-01-01 Trip/img_0001.xmp")).unwrap();
    assert_eq!(sidecar.permissions().mode() & 0o666, 0o666);
}

#[test]
fn dry_run_changes_nothing() {
    let env = TestEnv::new();
    trip_library(&env);
    let root = env.root().to_str().unwrap().to_string();

    let result = env.run(&["maintain", &root, "--dry-run"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_exists!(env, "2024-01-01 Trip/._img_0001.raw");
    assert_exists!(env, "2024-01-01 Trip/1_EDIT/img_0001.tif");
    assert_output_contains!(result, "would remove");
    assert_output_contains!(result, "Dry Run Complete");
}

#[test]
fn disabled_stage_is_skipped() {
    let env = TestEnv::new();
    trip_library(&env);
    let root = env.root().to_str().unwrap().to_string();

    let result = env.run(&[
        "maintain",
        &root,
        "--yes",
        "--no-remove-edits",
        "--no-hardlink-selects",
        "--no-fix-permissions",
    ]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_missing!(env, "2024-01-01 Trip/._img_0001.raw");
    assert_exists!(env, "2024-01-01 Trip/1_EDIT/img_0001.tif");
}

#[test]
fn second_run_has_nothing_to_do() {
    let env = TestEnv::new();
    trip_library(&env);
    let root = env.root().to_str().unwrap().to_string();

    assert!(env.run(&["maintain", &root, "--yes"]).is_success());
    let second = env.run(&["--json", "maintain", &root, "--yes"]);

    assert!(second.is_success(), "{}", second.combined_output());
    let events = second.json_events();
    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["actions"], 0);
}

#[test]
fn missing_library_fails_with_hint() {
    let env = TestEnv::new();
    let missing = env.path("nope");

    let result = env.run(&["maintain", missing.to_str().unwrap()]);

    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "photo library directory not found");
    assert!(!result.stdout.contains("Lightbox Maintain"));
    assert!(!result.stdout.contains("Apply maintenance"));
}

#[test]
fn library_file_is_not_a_directory() {
    let env = TestEnv::new();
    env.write("file.txt", "x");

    let result = env.run(&["maintain", env.path("file.txt").to_str().unwrap()]);

    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "not a directory");
}

#[test]
fn parallel_jobs_process_every_project() {
    let env = TestEnv::new();
    for name in ["a", "b", "c", "d"] {
        env.write(&format!("{}/0_RAW/x.raw", name), "raw");
        env.write(&format!("{}/._x.raw", name), "fork");
    }
    let root = env.root().to_str().unwrap().to_string();

    let result = env.run(&["--json", "maintain", &root, "--yes", "--jobs", "3"]);

    assert!(result.is_success(), "{}", result.combined_output());
    for name in ["a", "b", "c", "d"] {
        assert_missing!(env, &format!("{}/._x.raw", name));
    }
    let complete = result.json_events().pop().unwrap();
    assert_eq!(complete["projects"], 4);
    assert_eq!(complete["removed"], 4);
}
