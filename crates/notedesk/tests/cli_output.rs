//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.
//! None of these tests need a running server: they stop before sending, or
//! target a closed local port.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const UNREACHABLE: &str = "http://127.0.0.1:9";

/// Run notedesk with an isolated HOME and working directory.
fn run_notedesk(home: &TempDir, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_notedesk"))
        .args(args)
        .env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .current_dir(home.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn notedesk");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait on notedesk")
}

fn write_config(home: &TempDir, contents: &str) {
    let dir = home.path().join(".notedesk");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), contents).unwrap();
}

#[test]
fn test_delete_with_blank_id_reports_missing_identifier() {
    let home = TempDir::new().unwrap();
    let output = run_notedesk(&home, &["delete", "note", "  "], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Could not find note ID"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_toggle_with_blank_id_reports_missing_identifier() {
    let home = TempDir::new().unwrap();
    let output = run_notedesk(
        &home,
        &["--server", UNREACHABLE, "toggle", " ", "--current", "private", "--json"],
        "",
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Could not find note ID"),
        "stderr: {}",
        stderr
    );
    assert!(!stderr.contains("Network error"), "stderr: {}", stderr);

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["outcome"], "error_reported");
    assert_eq!(value["error_code"], "MISSING_IDENTIFIER");
    assert_eq!(value["message"], "Error: Could not find note ID");
    assert!(value["page"]["share_buttons"].as_array().unwrap().is_empty());
}

#[test]
fn test_declined_profile_deletion_exits_cleanly() {
    let home = TempDir::new().unwrap();
    let output = run_notedesk(
        &home,
        &["--server", UNREACHABLE, "delete", "student", "9"],
        "n\n",
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Aborted."), "stdout: {}", stdout);
    assert!(
        stderr.contains("Are you sure you want to delete this student profile?"),
        "stderr: {}",
        stderr
    );
    assert!(
        !stderr.contains("Network error"),
        "nothing should be sent, stderr: {}",
        stderr
    );
}

/// Verify that stdout contains only user-facing output (no JSON logs)
#[test]
fn test_stdout_is_clean_in_quiet_mode() {
    let home = TempDir::new().unwrap();
    let output = run_notedesk(
        &home,
        &["--server", UNREACHABLE, "delete", "teacher", "3"],
        "no\n",
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
    assert!(
        !stderr.contains(r#""event":"#),
        "quiet mode should not log, got: {}",
        stderr
    );
}

#[test]
fn test_verbose_mode_logs_to_stderr() {
    let home = TempDir::new().unwrap();
    let output = run_notedesk(&home, &["-v", "delete", "note", ""], "");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains(r#""event":"#), "stdout: {}", stdout);
    assert!(
        stderr.contains("core.mutation.delete_started"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_unreachable_server_reports_network_error() {
    let home = TempDir::new().unwrap();
    let output = run_notedesk(&home, &["--server", UNREACHABLE, "delete", "note", "42"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Network error - please try again"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_share_failure_uses_share_network_message() {
    let home = TempDir::new().unwrap();
    let output = run_notedesk(
        &home,
        &["--server", UNREACHABLE, "toggle", "7", "--current", "private"],
        "",
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Network error - please check console for details"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_json_output_keeps_page_unchanged_on_failure() {
    let home = TempDir::new().unwrap();
    let output = run_notedesk(
        &home,
        &["--server", UNREACHABLE, "delete", "note", "42", "--json"],
        "",
    );

    assert!(!output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["outcome"], "error_reported");
    assert_eq!(value["error_code"], "TRANSPORT_FAILED");
    assert_eq!(value["page"]["elements"][0]["id"], "42");
    assert_eq!(value["page"]["elements"][0]["opacity"], 1.0);
}

#[test]
fn test_config_can_disable_profile_confirmation() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        &format!(
            "[server]\nbase_url = \"{}\"\n\n[confirm]\nstudent = false\n",
            UNREACHABLE
        ),
    );

    let output = run_notedesk(&home, &["delete", "student", "9"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Are you sure"), "stderr: {}", stderr);
    assert!(
        stderr.contains("Network error - please try again"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_invalid_server_override_is_rejected() {
    let home = TempDir::new().unwrap();
    let output = run_notedesk(&home, &["--server", "ftp://notes", "delete", "note", "1"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid --server value"), "stderr: {}", stderr);
}
