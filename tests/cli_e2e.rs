//! End-to-end tests of the generated test main.
//!
//! The `demo_*` binaries declare their tests with `#[lstest::test]`, so these runs exercise the real
//! load-time registration path, argument handling, and exit codes.

use std::process::{Command, Output};

fn run_demo(bin: &str, args: &[&str]) -> (i32, String) {
    let Output { status, stderr, .. } = Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn demo binary");
    let code = status.code().expect("demo binary killed by a signal");
    (code, String::from_utf8(stderr).expect("stderr is not UTF-8"))
}

fn passing(args: &[&str]) -> (i32, String) {
    run_demo(env!("CARGO_BIN_EXE_demo_passing"), args)
}

fn mixed(args: &[&str]) -> (i32, String) {
    run_demo(env!("CARGO_BIN_EXE_demo_mixed"), args)
}

fn failing(args: &[&str]) -> (i32, String) {
    run_demo(env!("CARGO_BIN_EXE_demo_failing"), args)
}

#[test]
fn test_all_passing_exits_zero() {
    let (code, stderr) = passing(&[]);
    assert_eq!(code, 0, "{stderr}");
    assert_eq!(stderr.lines().last(), Some("3 succeeded, 0 failed, 3 total"));
}

#[test]
fn test_boolean_failure_is_reported_but_not_counted() {
    let (code, stderr) = passing(&[]);
    assert_eq!(code, 0);
    assert!(
        stderr.contains("boolean_check_is_advisory: FAILED: add(2, 2) == 5 (demos/passing.rs:"),
        "{stderr}"
    );
}

#[test]
fn test_failure_exits_one_and_reports_totals() {
    let (code, stderr) = mixed(&[]);
    assert_eq!(code, 1, "{stderr}");

    let lines: Vec<_> = stderr.lines().collect();
    assert_eq!(lines.len(), 2, "{stderr}");
    assert!(
        lines[0].starts_with("first_fails: FAILED: 2 * 2 == 5 (actual: 4 != 5) (demos/mixed.rs:"),
        "{stderr}"
    );
    assert_eq!(lines[1], "1 succeeded, 1 failed, 2 total");
}

#[test]
fn test_failfast_stops_after_first_failing_test() {
    let (code, stderr) = failing(&["--failfast"]);
    assert_eq!(code, 1, "{stderr}");

    let lines: Vec<_> = stderr.lines().collect();
    assert_eq!(lines.len(), 2, "{stderr}");
    assert!(lines[0].contains(": FAILED: "), "{stderr}");
    assert_eq!(lines[1], "0 succeeded, 1 failed, 1 total");
}

#[test]
fn test_without_failfast_every_test_runs() {
    let (code, stderr) = failing(&[]);
    assert_eq!(code, 1, "{stderr}");

    let lines: Vec<_> = stderr.lines().collect();
    assert_eq!(lines.len(), 3, "{stderr}");
    assert_eq!(lines[2], "0 succeeded, 2 failed, 2 total");
}

#[test]
fn test_double_dash_is_rejected() {
    let (code, stderr) = failing(&["--"]);
    assert_eq!(code, 1, "{stderr}");
    assert!(stderr.starts_with("unknown argument: --\n\nUsage: "), "{stderr}");
    assert!(!stderr.contains("total"));
}

#[test]
fn test_help_prints_usage_and_runs_nothing() {
    let (code, stderr) = mixed(&["--help"]);
    assert_eq!(code, 0, "{stderr}");
    assert!(stderr.starts_with("Usage: "), "{stderr}");
    assert!(stderr.contains("--failfast   Stop after the first failed test"));
    assert!(!stderr.contains("FAILED"));
    assert!(!stderr.contains("total"));
}

#[test]
fn test_unknown_flag_exits_one_without_running() {
    let (code, stderr) = passing(&["--bogus"]);
    assert_eq!(code, 1, "{stderr}");
    assert!(stderr.starts_with("unknown argument: --bogus\n\nUsage: "), "{stderr}");
    assert!(!stderr.contains("total"));
}
