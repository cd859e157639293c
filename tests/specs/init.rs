// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `kindly init`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > kindly init creates kindly.toml in current directory
#[test]
fn init_creates_kindly_toml_in_current_directory() {
    let temp = Project::empty();

    kindly_cmd()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Created kindly.toml"));

    let config = std::fs::read_to_string(temp.path().join("kindly.toml")).unwrap();
    assert!(config.contains("version = 1"));
}

/// > Refuses to overwrite existing kindly.toml without --force
#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = Project::empty();
    temp.config("version = 1\n# existing\n");

    kindly_cmd()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("already exists"))
        .stderr(predicates::str::contains("--force"));
}

/// > --force overwrites existing kindly.toml
#[test]
fn init_force_overwrites_existing_config() {
    let temp = Project::empty();
    temp.config("version = 1\n# existing content\n");

    kindly_cmd()
        .args(["init", "--force"])
        .current_dir(temp.path())
        .assert()
        .success();

    let config = std::fs::read_to_string(temp.path().join("kindly.toml")).unwrap();
    assert!(!config.contains("# existing content"), "should overwrite");
    assert!(config.contains("min_severity"));
}

/// > The generated config is accepted by check
#[test]
fn init_output_is_valid_config() {
    let temp = Project::empty();
    kindly_cmd().arg("init").current_dir(temp.path()).assert().success();
    temp.file("a.md", "Fine.\n");

    check().pwd(&temp).passes();
}
