//! # kbchat CLI Serve Integration Tests
//!
//! File: cli/tests/serve.rs
//!
//! ## Overview
//!
//! Integration tests for `kbchat serve`. Request handling is covered by the
//! router tests in `server_logic.rs`; these tests only cover startup paths
//! that terminate on their own.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_serve_missing_kb_fails_before_binding() {
    let fixture = Fixture::refund();
    fixture
        .cmd()
        .args(["serve", "--kb", "missing.json", "--port", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read knowledge base"))
        .stdout(predicate::str::contains("Server starting").not());
}

#[test]
fn test_serve_invalid_config_fails() {
    let fixture = Fixture::refund();
    fixture.write(".kbchat.toml", "[server]\nport = \"not a number\"\n");
    fixture
        .cmd()
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML"));
}

#[test]
fn test_serve_invalid_port_flag_rejected() {
    kbchat_cmd()
        .args(["serve", "--port", "70000"])
        .assert()
        .failure();
}
