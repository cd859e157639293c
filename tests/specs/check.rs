// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `kindly check`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// EXIT CODES
// =============================================================================

/// > Exit code 0 when no results are found
#[test]
fn clean_fixture_passes() {
    check()
        .on("clean")
        .passes()
        .stdout_has("PASS: no non-inclusive language found in 1 file");
}

/// > Exit code 1 when a non-inclusive result is found
#[test]
fn violations_fixture_fails() {
    check()
        .on("violations")
        .fails()
        .stdout_has("docs/post.md:1: non-inclusive to go crazy: \"crazy\"")
        .stdout_has("notes.txt:1: non-inclusive lame: \"lame\"");
}

/// > Potentially non-inclusive results alone do not fail the run
#[test]
fn potential_results_pass_without_strict() {
    check()
        .on("potential")
        .passes()
        .stdout_has("potentially-non-inclusive alcoholic: \"an alcoholic\"");
}

/// > --strict fails on any result
#[test]
fn strict_fails_on_potential_results() {
    check().on("potential").args(&["--strict"]).fails();
}

/// > Exit code 2 when a path does not exist
#[test]
fn missing_path_errors() {
    check()
        .on("clean")
        .args(&["no-such-dir"])
        .errors()
        .stderr_has("path not found");
}

/// > Exit code 2 when a directory under the walk cannot be read
#[cfg(unix)]
#[test]
fn unreadable_directory_errors() {
    use std::fs::{Permissions, set_permissions};
    use std::os::unix::fs::PermissionsExt;

    let project = Project::with_defaults();
    project.file("ok.md", "All good here.\n");
    project.file("locked/post.md", "All good here too.\n");
    let locked = project.path().join("locked");
    set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();
    // Permission bits do not bind root.
    if std::fs::read_dir(&locked).is_ok() {
        set_permissions(&locked, Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = check().pwd(&project).errors();
    set_permissions(&locked, Permissions::from_mode(0o755)).unwrap();
    result.stdout_has("locked: error:").stdout_has("1 file could not be read");
}

// =============================================================================
// FILE SELECTION
// =============================================================================

/// > Only files matching the include globs are checked
#[test]
fn source_files_are_not_checked() {
    check().on("violations").fails().stdout_lacks("main.rs");
}

/// > An explicit file is checked even when it doesn't match the include globs
#[test]
fn explicit_file_is_checked() {
    check()
        .on("violations")
        .args(&["src/main.rs"])
        .fails()
        .stdout_has("src/main.rs:1: non-inclusive crazy");
}

/// > "-" reads stdin
#[test]
fn stdin_is_checked() {
    check()
        .on("clean")
        .stdin("Honestly, that plan is insane.")
        .fails()
        .stdout_has("<stdin>:1: non-inclusive insane");
}

#[test]
fn clean_stdin_passes() {
    check().on("clean").stdin("A perfectly fine sentence.").passes();
}

// =============================================================================
// OUTPUT
// =============================================================================

/// > Text output includes plain-text feedback and the help link
#[test]
fn text_output_includes_feedback() {
    check()
        .on("violations")
        .fails()
        .stdout_has("  Avoid using \"to go crazy\" as it is potentially harmful.")
        .stdout_has("  https://yoa.st/inclusive-language-disability")
        .stdout_lacks("<i>");
}

/// > --limit caps the listed occurrences
#[test]
fn limit_caps_occurrences() {
    check()
        .on("violations")
        .args(&["--limit", "1"])
        .fails()
        .stdout_has("more occurrences not shown (use --no-limit)");
}

#[test]
fn no_limit_lists_everything() {
    check()
        .on("violations")
        .args(&["--limit", "1", "--no-limit"])
        .fails()
        .stdout_lacks("not shown");
}

/// > JSON output lists files, results and a summary
#[test]
fn json_output() {
    let result = check().on("violations").json().fails();
    let json = result.json();

    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    let post = files.iter().find(|f| f["path"].as_str().unwrap().ends_with("post.md")).unwrap();
    let ids: Vec<&str> = post["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["identifier"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["alcoholic", "to go crazy"]);
    assert!(post["results"][1]["feedback"].as_str().unwrap().contains("Learn more."));
    assert_eq!(json["summary"]["non_inclusive"], 2);
    assert_eq!(json["summary"]["potentially_non_inclusive"], 1);
}

/// > Colors can be forced on
#[test]
fn color_always_emits_escape_codes() {
    let result = check().on("violations").args(&["--color", "always"]).fails();
    assert!(result.stdout.contains('\u{1b}'), "{}", result.stdout);
}

#[test]
fn no_color_wins_over_always() {
    let result = check().on("violations").args(&["--color", "always", "--no-color"]).fails();
    assert!(!result.stdout.contains('\u{1b}'));
}
