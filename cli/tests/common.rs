//! # Supportbot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! Shared helpers for the integration test files. Each `.rs` file in `tests/`
//! is compiled as its own crate and pulls this in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// # Get Supportbot Command (`supportbot_cmd`)
///
/// An `assert_cmd::Command` for the compiled `supportbot` binary, with the
/// API key variable removed so tests never pick up a developer's credentials.
pub fn supportbot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("supportbot").expect("Failed to find supportbot binary for testing");
    cmd.env_remove("SUPPORTBOT_API_KEY");
    cmd
}

/// Same as `supportbot_cmd`, running inside `dir` so no project config is
/// picked up from the repo. `HOME` and `XDG_CONFIG_HOME` also point into
/// `dir`, so a developer's own user config never leaks into a test.
pub fn supportbot_cmd_in(dir: &Path) -> Command {
    let mut cmd = supportbot_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd
}

/// Where `supportbot_cmd_in(dir)` looks for the user config file on Linux.
pub fn user_config_file(dir: &Path) -> PathBuf {
    dir.join(".config").join("supportbot").join("config.toml")
}
