// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for configuration.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Disabled rules are skipped
#[test]
fn disabled_rule_is_skipped() {
    let project = Project::empty();
    project.config("version = 1\n[check]\ndisable = [\"lame\"]\n");
    project.file("a.md", "That is lame.\n");

    check().pwd(&project).passes();
}

/// > min_severity drops less severe rules
#[test]
fn min_severity_filters_results() {
    let project = Project::empty();
    project.config("version = 1\n[check]\nmin_severity = \"non-inclusive\"\n");
    project.file("a.md", "She is an alcoholic.\n");

    check().pwd(&project).args(&["--strict"]).passes();
}

/// > include globs choose which files are checked
#[test]
fn include_globs_are_honored() {
    let project = Project::empty();
    project.config("version = 1\n[check]\ninclude = [\"**/*.rst\"]\n");
    project.file("a.md", "So lame.\n");
    project.file("b.rst", "So dumb.\n");

    check().pwd(&project).fails().stdout_has("b.rst").stdout_lacks("a.md");
}

/// > Unknown keys are errors
#[test]
fn unknown_config_key_fails() {
    let project = Project::empty();
    project.config("version = 1\nunknown_key = true\n");

    check().pwd(&project).errors().stderr_has("unknown field");
}

/// > Unsupported versions are errors
#[test]
fn unsupported_version_fails() {
    let project = Project::empty();
    project.config("version = 7\n");

    check().pwd(&project).errors().stderr_has("unsupported config version 7");
}

/// > Unknown rule identifiers warn but do not fail
#[test]
fn unknown_rule_warns() {
    let project = Project::empty();
    project.config("version = 1\n[check]\ndisable = [\"not-a-rule\"]\n");
    project.file("a.md", "Fine.\n");

    check().pwd(&project).passes().stderr_has("unknown rule `not-a-rule`");
}

/// > -C selects a config file explicitly
#[test]
fn explicit_config_flag() {
    let project = Project::with_defaults();
    project.file("strict.toml", "version = 1\n[check]\ndisable = [\"lame\"]\n");
    project.file("a.md", "So lame.\n");

    check().pwd(&project).fails();
    check().pwd(&project).args(&["-C", "strict.toml"]).passes();
}

/// > KINDLY_CONFIG selects a config file
#[test]
fn config_env_var() {
    let project = Project::with_defaults();
    project.file("other.toml", "version = 1\n[check]\ndisable = [\"lame\"]\n");
    project.file("a.md", "So lame.\n");

    kindly_cmd()
        .arg("check")
        .env("KINDLY_CONFIG", "other.toml")
        .current_dir(project.path())
        .assert()
        .success();
}

/// > A missing explicit config file is an error
#[test]
fn missing_explicit_config_errors() {
    let project = Project::with_defaults();

    check().pwd(&project).args(&["-C", "nope.toml"]).errors().stderr_has("failed to read");
}
