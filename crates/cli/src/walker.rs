// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File discovery for `kindly check`.
//!
//! Walks directories with the `ignore` crate (respecting .gitignore) and
//! keeps files matching the configured include globs but not the exclude
//! globs. Globs match paths relative to the walk root.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::config::{CheckConfig, defaults};
use crate::error::{ConfigError, Result};

/// Walker settings.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub max_depth: Option<usize>,
    pub git_ignore: bool,
    pub hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            include: defaults::include(),
            exclude: defaults::exclude(),
            max_depth: None,
            git_ignore: true,
            hidden: true,
        }
    }
}

impl WalkerConfig {
    pub fn from_check_config(check: &CheckConfig) -> Self {
        Self { include: check.include.clone(), exclude: check.exclude.clone(), ..Self::default() }
    }
}

/// A file selected for checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    pub path: PathBuf,
}

/// An entry the walk could not visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkError {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkStats {
    pub files_found: usize,
    pub files_skipped: usize,
    pub errors: Vec<WalkError>,
}

pub struct FileWalker {
    config: WalkerConfig,
    include: GlobSet,
    exclude: GlobSet,
}

impl FileWalker {
    /// Fails when an include or exclude pattern is not a valid glob.
    pub fn new(config: WalkerConfig) -> Result<Self> {
        let include = build_glob_set(&config.include)?;
        let exclude = build_glob_set(&config.exclude)?;
        Ok(Self { config, include, exclude })
    }

    /// Whether `relative` passes the include and exclude globs.
    pub fn is_selected(&self, relative: &Path) -> bool {
        self.include.is_match(relative) && !self.exclude.is_match(relative)
    }

    /// Walk `root` and collect matching files, sorted by path.
    ///
    /// A `root` that is itself a file is returned as-is, bypassing the globs.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let mut stats = WalkStats::default();
        let mut files = Vec::new();

        if root.is_file() {
            stats.files_found = 1;
            files.push(WalkedFile { path: root.to_path_buf() });
            return (files, stats);
        }

        let walker = WalkBuilder::new(root)
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .max_depth(self.config.max_depth)
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("walk error: {}", e);
                    let path = error_path(&e).unwrap_or(root).to_path_buf();
                    stats.errors.push(WalkError { path, message: e.to_string() });
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if !self.is_selected(relative) {
                tracing::trace!("skipping {}", relative.display());
                stats.files_skipped += 1;
                continue;
            }

            // Report `./a.md` as `a.md` when walking the working directory.
            let path = if root == Path::new(".") { relative } else { entry.path() };
            files.push(WalkedFile { path: path.to_path_buf() });
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        stats.files_found = files.len();
        tracing::debug!(
            "walked {}: {} files, {} skipped, {} errors",
            root.display(),
            stats.files_found,
            stats.files_skipped,
            stats.errors.len()
        );
        (files, stats)
    }
}

/// The path an `ignore` error is about, if it names one.
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        _ => None,
    }
}

/// Build a GlobSet from pattern strings.
fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| ConfigError::Glob {
            pattern: pattern.clone(),
            message: e.kind().to_string(),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| ConfigError::Glob {
        pattern: patterns.join(", "),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
