#![cfg(feature = "cli")]

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Points `--config` at a file that doesn't exist so the user's own config
/// can't leak into the test.
fn run(tmp_dir: &TempDir, args: &[&str]) -> Output {
    let config = tmp_dir.path().join("absent.toml");
    Command::new(env!("CARGO_BIN_EXE_gatelog"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .expect("failed to run gatelog")
}

#[test]
fn warning_goes_to_stdout() {
    let tmp_dir = TempDir::new().unwrap();
    let output = run(&tmp_dir, &["warning", "hello", "world"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("WARNING "));
    assert!(stdout.trim_end().ends_with("hello world"));
}

#[test]
fn threshold_suppresses_lower_levels() {
    let tmp_dir = TempDir::new().unwrap();
    let output = run(&tmp_dir, &["--threshold", "ERROR", "debug", "quiet"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_threshold_exits_failure() {
    let tmp_dir = TempDir::new().unwrap();
    let output = run(&tmp_dir, &["--threshold", "loud", "info", "x"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid log level"));
}

#[test]
fn fatal_writes_then_exits_with_status_one() {
    let tmp_dir = TempDir::new().unwrap();
    let output = run(&tmp_dir, &["fatal", "boom"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("ERROR "));
    assert!(stdout.trim_end().ends_with("boom"));
}

#[test]
fn panic_writes_then_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let output = run(&tmp_dir, &["panic", "unrecoverable"]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("ERROR "));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecoverable"));
}

#[test]
fn file_flag_redirects_output() {
    let tmp_dir = TempDir::new().unwrap();
    let log_path = tmp_dir.path().join("logs").join("cli.log");
    let log_arg = log_path.to_string_lossy().into_owned();

    let output = run(&tmp_dir, &["--file", &log_arg, "error", "disk", "gone"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let content = fs::read_to_string(&log_path).unwrap();
    assert!(content.starts_with("ERROR "));
    assert!(content.trim_end().ends_with("disk gone"));
}
