use std::process::Command;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_lightbox")
}

#[test]
fn help_lists_every_command() {
    let output = Command::new(bin()).arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["maintain", "export", "rename"] {
        assert!(
            stdout.contains(command),
            "help should mention '{}'; got:\n{}",
            command,
            stdout
        );
    }
}

#[test]
fn maintain_help_shows_toggle_pairs() {
    let output = Command::new(bin())
        .args(["maintain", "--help"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--remove-hidden"));
    assert!(stdout.contains("--no-remove-hidden"));
    assert!(stdout.contains("--jobs"));
}

#[test]
fn version_flag_prints_package_version() {
    let output = Command::new(bin()).arg("--version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let output = Command::new(bin()).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn zero_jobs_is_rejected() {
    let output = Command::new(bin())
        .args(["maintain", ".", "--jobs", "0"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
