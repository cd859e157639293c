// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `kindly rules`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Lists every rule with its severity and category
#[test]
fn lists_rules_as_text() {
    let project = Project::with_defaults();

    kindly_cmd()
        .arg("rules")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("theMentallyIll"))
        .stdout(predicates::str::contains("to drive crazy"))
        .stdout(predicates::str::contains("67 rules"));
}

/// > JSON output is the serialized rule table
#[test]
fn lists_rules_as_json() {
    let project = Project::with_defaults();

    let output = kindly_cmd()
        .args(["rules", "-o", "json"])
        .current_dir(project.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let rules: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rules = rules.as_array().unwrap();
    assert_eq!(rules.len(), 67);
    let ocd = rules.iter().find(|r| r["identifier"] == "OCD").unwrap();
    assert_eq!(ocd["filters"][0]["kind"], "preceded_by");
}

/// > Config narrows the listed rules
#[test]
fn config_narrows_rules() {
    let project = Project::empty();
    project.config("version = 1\n[check]\ndisable = [\"lame\", \"lamer\"]\n");

    kindly_cmd()
        .arg("rules")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("65 rules"))
        .stdout(predicates::str::contains("lamest"));
}
