//! Startup failures of the `api` binary.

use std::net::TcpListener;
use std::process::{Command, Output};

fn run_api(envs: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_api"))
        .env_remove("HOST")
        .env_remove("PORT")
        .env_remove("RUST_LOG")
        .env_remove("LOG_FORMAT")
        .envs(envs.iter().copied())
        .output()
        .expect("failed to run api binary")
}

#[test]
fn test_exits_nonzero_when_port_is_taken() {
    let held = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = held.local_addr().unwrap().port().to_string();

    let output = run_api(&[("HOST", "127.0.0.1"), ("PORT", &port)]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "stderr: {stderr}");
    assert!(stderr.contains("Failed to bind"), "stderr: {stderr}");
    assert!(stderr.contains(&port), "stderr: {stderr}");
    assert!(!stderr.contains("listening"), "stderr: {stderr}");

    drop(held);
}

#[test]
fn test_exits_nonzero_on_malformed_port() {
    let output = run_api(&[("HOST", "127.0.0.1"), ("PORT", "abc")]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "stderr: {stderr}");
    assert!(stderr.contains("Invalid PORT"), "stderr: {stderr}");
}

#[test]
fn test_exits_nonzero_on_malformed_log_filter() {
    let output = run_api(&[("HOST", "127.0.0.1"), ("PORT", "0"), ("RUST_LOG", "api=loud")]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "stderr: {stderr}");
    assert!(stderr.contains("Invalid RUST_LOG"), "stderr: {stderr}");
}

#[test]
fn test_failure_logs_are_plain_text_when_captured() {
    let output = run_api(&[("PORT", "abc")]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(!stderr.contains('\u{1b}'), "stderr: {stderr:?}");
}
