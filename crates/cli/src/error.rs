// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for rule tables and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Authoring defects found while building a rule table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("duplicate rule identifier `{0}`")]
    DuplicateIdentifier(String),

    #[error("rule `{0}` has no phrases")]
    NoPhrases(String),

    #[error("rule `{0}` has an empty phrase")]
    EmptyPhrase(String),

    #[error("rule `{0}` has no inclusive alternatives")]
    NoAlternatives(String),

    #[error("rule `{identifier}` feedback references %{index}$s but only {alternatives} alternative(s) exist")]
    UnknownPlaceholder { identifier: String, index: usize, alternatives: usize },

    #[error("rule `{identifier}` feedback never uses alternative %{index}$s")]
    UnusedAlternative { identifier: String, index: usize },

    #[error("rule `{identifier}` has a {filter} filter with an empty exception list")]
    EmptyFilter { identifier: String, filter: &'static str },

    #[error("rule `{identifier}` has a {filter} filter with an empty exception phrase")]
    EmptyException { identifier: String, filter: &'static str },
}

/// Problems loading `kindly.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unsupported config version {found} in {path} (expected {expected})")]
    Version { path: PathBuf, found: i64, expected: i64 },

    #[error("invalid glob pattern `{pattern}`: {message}")]
    Glob { pattern: String, message: String },
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
