//! # kbchat CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behavior of the `kbchat` command-line interface: standard flags
//! like `--version` and `--help`, and argument errors.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_main_help_flag() {
    kbchat_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("serve")
                .and(predicate::str::contains("ask"))
                .and(predicate::str::contains("check")),
        );
}

#[test]
fn test_main_version_flag() {
    kbchat_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_fails() {
    kbchat_cmd().assert().failure();
}

#[test]
fn test_serve_help_lists_options() {
    kbchat_cmd()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--kb")
                .and(predicate::str::contains("--port"))
                .and(predicate::str::contains("--no-cors")),
        );
}
