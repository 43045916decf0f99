//! CLI tests for `attendance check` and `attendance archives`.
//!
//! Spawns the binary inside a temporary working directory and verifies the
//! default file layout, console output, and exit codes.

use std::fs;
use std::process::Command;

use attendance::exit_codes;
use attendance::test_support::{TestWorkspace, config_json, roster_csv};

fn attendance(ws: &TestWorkspace, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_attendance"))
        .current_dir(ws.path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run attendance")
}

#[test]
fn check_uses_default_layout_in_working_directory() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.write_config(&config_json(20, 50.0, 75.0, "live"))
        .expect("config");
    ws.write_roster(&roster_csv(&[
        ("Ada", "ada@example.com", "9"),
        ("Linus", "linus@example.com", "16"),
    ]))
    .expect("roster");

    let output = attendance(&ws, &["check"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Alert logged for Ada\nreport: rows=2 urgent=1 warning=0\n"
    );
    let log = ws.read_log().expect("log");
    assert!(log.starts_with("--- Attendance Report: "));
    assert!(log.contains("ALERT TO ada@example.com: URGENT: Ada, your attendance is 45.0%."));
}

#[test]
fn second_check_archives_first_report() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.write_config(&config_json(20, 50.0, 75.0, "dry"))
        .expect("config");
    ws.write_roster(&roster_csv(&[("Ada", "ada@example.com", "9")]))
        .expect("roster");
    fs::write(&ws.paths.log, "previous\n").expect("old log");

    let output = attendance(&ws, &["check"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(
        String::from_utf8_lossy(&output.stdout)
            .starts_with("[DRY RUN] Email to ada@example.com: URGENT: Ada")
    );

    let listing = attendance(&ws, &["archives"]);
    assert_eq!(listing.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&listing.stdout);
    let archives: Vec<&str> = stdout.lines().collect();
    assert_eq!(archives.len(), 1);
    assert!(archives[0].ends_with(".log.archive"), "{}", archives[0]);
}

#[test]
fn missing_config_exits_with_invalid_config() {
    let ws = TestWorkspace::new().expect("workspace");

    let output = attendance(&ws, &["check"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID_CONFIG));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file not found"), "{stderr}");
    assert!(!ws.paths.log.exists());
}

#[test]
fn malformed_row_exits_with_invalid_roster() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.write_config(&config_json(20, 50.0, 75.0, "live"))
        .expect("config");
    ws.write_roster(&roster_csv(&[
        ("Ada", "ada@example.com", "9"),
        ("Bad", "bad@example.com", "lots"),
    ]))
    .expect("roster");

    let output = attendance(&ws, &["check"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID_ROSTER));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed roster row at line 3"), "{stderr}");
    let log = ws.read_log().expect("partial log");
    assert!(log.contains("ALERT TO ada@example.com"));
}

#[test]
fn zero_sessions_exits_with_invalid_roster() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.write_config(&config_json(0, 50.0, 75.0, "live"))
        .expect("config");
    ws.write_roster(&roster_csv(&[("Ada", "ada@example.com", "9")]))
        .expect("roster");

    let output = attendance(&ws, &["check"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID_ROSTER));
}
