//! # Supportbot CLI Config Integration Tests
//!
//! File: cli/tests/config.rs
//! Author: Christi Mahu
//!
//! Integration tests for `supportbot config init` and `supportbot config show`.
//! `init` is always pointed at a temporary path so the real user config is
//! never touched.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_init_writes_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    supportbot_cmd_in(dir.path())
        .args(["config", "init", "--path"])
        .arg(&path)
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[remote]"));
    assert!(content.contains("model = \"gpt-4o\""));
    assert!(content.contains("[session]"));
}

#[test]
fn test_config_init_refuses_overwrite_without_force() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "# mine\n").unwrap();

    supportbot_cmd_in(dir.path())
        .args(["config", "init", "--path"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

    supportbot_cmd_in(dir.path())
        .args(["config", "init", "--force", "--path"])
        .arg(&path)
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[remote]"));
}

#[test]
fn test_config_show_applies_project_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".supportbot.toml"),
        "[remote]\nmodel = \"gpt-4o-mini\"\n",
    )
    .unwrap();

    supportbot_cmd_in(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("model = \"gpt-4o-mini\""))
        .stdout(predicate::str::contains("history_file = \"chat_history.json\""));
}

#[test]
#[cfg(target_os = "linux")]
fn test_config_show_reads_isolated_user_file() {
    let dir = tempdir().unwrap();
    let user_file = user_config_file(dir.path());
    fs::create_dir_all(user_file.parent().unwrap()).unwrap();
    fs::write(&user_file, "[remote]\nmax_tokens = 321\n").unwrap();

    supportbot_cmd_in(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_tokens = 321"));
}

/// # Project Restores Defaults (`test_config_show_project_restores_default_values`)
///
/// A project file that sets a key back to its default still overrides the
/// user file.
#[test]
#[cfg(target_os = "linux")]
fn test_config_show_project_restores_default_values() {
    let dir = tempdir().unwrap();
    let user_file = user_config_file(dir.path());
    fs::create_dir_all(user_file.parent().unwrap()).unwrap();
    fs::write(
        &user_file,
        "[remote]\nmodel = \"user-model\"\n\n[session]\nload_on_start = false\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(".supportbot.toml"),
        "[remote]\nmodel = \"gpt-4o\"\n\n[session]\nload_on_start = true\n",
    )
    .unwrap();

    supportbot_cmd_in(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("model = \"gpt-4o\""))
        .stdout(predicate::str::contains("load_on_start = true"))
        .stdout(predicate::str::contains("user-model").not());
}
