// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Files checked when no `include` is configured.
pub fn include() -> Vec<String> {
    vec!["**/*.md".to_string(), "**/*.txt".to_string()]
}

/// Files skipped when no `exclude` is configured.
pub fn exclude() -> Vec<String> {
    vec!["**/node_modules/**".to_string(), "**/target/**".to_string()]
}

/// Contents written by `kindly init`.
pub const TEMPLATE: &str = r#"version = 1

[check]
# Rule identifiers to skip, e.g. ["crazy", "lame"].
disable = []

# Categories to run. Empty runs every category.
categories = []

# "non-inclusive" reports only the most severe results.
min_severity = "potentially-non-inclusive"

include = ["**/*.md", "**/*.txt"]
exclude = ["**/node_modules/**", "**/target/**"]
"#;
