//! `lightbox export` against stand-in raster and metadata tools.

mod common;

use common::*;

#[test]
fn missing_edit_dir_is_a_precondition_error() {
    let env = TestEnv::new();
    env.mkdir("0_RAW");

    let result = env.run(&["export"]);

    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "1_EDIT directory not found");
}

#[test]
fn empty_edit_dir_has_nothing_to_process() {
    let env = TestEnv::new();
    env.mkdir("0_RAW");
    env.mkdir("1_EDIT");

    let result = env.run(&["export"]);

    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "no *.tif files found");
}

#[cfg(unix)]
mod with_tools {
    use super::common::*;
    use crate::{assert_missing, assert_output_contains};
    use tempfile::TempDir;

    fn project_with_tools() -> (TestEnv, TempDir) {
        let tools = TempDir::new().unwrap();
        let magick = fake_magick(tools.path());
        let exiv2 = fake_exiv2(tools.path());
        let env = TestEnv::new()
            .with_env("LIGHTBOX_MAGICK", magick)
            .with_env("LIGHTBOX_EXIV2", exiv2);
        env.write("0_RAW/img_0001.jpg", "raw jpeg");
        env.write("1_EDIT/img_0001-Enhanced-NR.tif", "edited");
        (env, tools)
    }

    #[test]
    fn exports_edit_to_jpeg() {
        let (env, _tools) = project_with_tools();

        let result = env.run(&["export", "--size", "small"]);

        assert!(result.is_success(), "{}", result.combined_output());
        assert_eq!(env.read("2_EXPORT/img_0001.jpg"), "edited");
        assert_output_contains!(result, "Export Complete");
    }

    #[test]
    fn dry_run_lists_commands_without_writing() {
        let (env, _tools) = project_with_tools();

        let result = env.run(&["export", "--dry-run", "--no-border"]);

        assert!(result.is_success(), "{}", result.combined_output());
        assert_missing!(env, "2_EXPORT/img_0001.jpg");
        assert_output_contains!(result, "-resize 4000x3500>");
        assert_output_contains!(result, "-quality 99");
        assert!(!result.stdout.contains("-bordercolor"));
    }

    #[test]
    fn json_reports_exported_files() {
        let (env, _tools) = project_with_tools();

        let result = env.run(&["--json", "export", "-p", "."]);
        assert!(result.is_success(), "{}", result.combined_output());

        let events = result.json_events();
        let action = events.iter().find(|e| e["event"] == "action").unwrap();
        assert_eq!(action["kind"], "exported");
        assert!(action["target"].as_str().unwrap().ends_with("img_0001.jpg"));
        assert_eq!(events.last().unwrap()["exported"], 1);
    }

    #[test]
    fn edit_without_metadata_source_fails_the_command() {
        let (env, _tools) = project_with_tools();
        env.write("1_EDIT/orphan.tif", "edited");

        let result = env.run(&["export"]);

        assert_eq!(result.exit_code, 1);
        assert_eq!(env.read("2_EXPORT/img_0001.jpg"), "edited");
        assert_output_contains!(result, "orphan.tif");
    }

    #[test]
    fn invalid_override_rules_abort_before_exporting() {
        let (env, _tools) = project_with_tools();
        env.write("rules.json", "{\"rules\": 3}");

        let result = env.run(&["export", "--exif", "rules.json"]);

        assert_eq!(result.exit_code, 1);
        assert_output_contains!(result, "invalid EXIF override rules");
        assert_missing!(env, "2_EXPORT/img_0001.jpg");
    }
}
