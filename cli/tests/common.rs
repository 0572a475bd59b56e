//! # kbchat Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test runs
//! the compiled `kbchat` binary inside its own temporary directory, so no
//! `.kbchat.toml`, user configuration or `KBCHAT_*` variable from the
//! developer's environment leaks into the result.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const REFUND_ANSWER: &str = "Refunds are processed within 5 business days.";
pub const FALLBACK_REPLY: &str = "I'm sorry, I don't have an answer for that.";

/// A temporary working directory holding a knowledge base file.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    /// Creates the directory with `knowledge_base.json` containing `kb_json`.
    pub fn with_kb(kb_json: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("knowledge_base.json"), kb_json)
            .expect("Failed to write knowledge base");
        Self { dir }
    }

    /// The refund-policy knowledge base used by most tests.
    pub fn refund() -> Self {
        Self::with_kb(&format!(
            r#"[
                {{"question": "", "answer": "should never appear"}},
                {{"question": "refund policy", "answer": "{}"}},
                {{"question": "opening hours", "answer": "We are open 9am to 5pm."}}
            ]"#,
            REFUND_ANSWER
        ))
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// `kbchat` running in the fixture directory with a clean environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = kbchat_cmd();
        cmd.current_dir(self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join(".config"));
        cmd
    }
}

/// # Get kbchat Command (`kbchat_cmd`)
///
/// An `assert_cmd::Command` for the compiled `kbchat` binary, with the
/// variables kbchat reads removed.
///
/// ## Panics
/// Panics if the `kbchat` binary cannot be found via `Command::cargo_bin`.
pub fn kbchat_cmd() -> Command {
    let mut cmd = Command::cargo_bin("kbchat").expect("Failed to find kbchat binary for testing");
    cmd.env_remove("KBCHAT_KB")
        .env_remove("KBCHAT_HOST")
        .env_remove("KBCHAT_PORT")
        .env_remove("RUST_LOG");
    cmd
}
